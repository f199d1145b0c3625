//! Flashable zip packaging
//!
//! Collects the module's root files and template subdirectories and writes
//! them into a zip with paths relative to the module directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::defaults;
use crate::error::ArchiveError;

/// A file to be placed in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name inside the zip, `/`-separated
    pub name: String,
    /// Source file on disk
    pub path: PathBuf,
}

/// Files selected for packaging
#[derive(Debug, Default)]
pub struct ArchiveListing {
    /// Files to archive, in archive order
    pub entries: Vec<ArchiveEntry>,
    /// Expected paths that did not exist
    pub missing: Vec<PathBuf>,
}

/// Enumerate the files to package from an assembled module directory
///
/// Root files come first, then each packaged subdirectory walked in sorted
/// order. Placeholder marker files are skipped. Entries that cannot be read,
/// such as dangling symlinks, are reported as missing.
pub fn collect_entries(module_dir: &Path) -> ArchiveListing {
    let mut listing = ArchiveListing::default();

    for name in defaults::ROOT_FILES {
        let path = module_dir.join(name);
        if path.is_file() {
            listing.entries.push(ArchiveEntry {
                name: (*name).to_string(),
                path,
            });
        } else {
            listing.missing.push(path);
        }
    }

    for dir in defaults::PACKAGED_DIRS {
        let root = module_dir.join(dir);
        if !root.is_dir() {
            listing.missing.push(root);
            continue;
        }

        for entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(&root).to_path_buf();
                    tracing::warn!("Cannot read {}: {e}", path.display());
                    listing.missing.push(path);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if defaults::IGNORED_FILES.contains(&&*file_name) {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(module_dir) {
                listing.entries.push(ArchiveEntry {
                    name: archive_name(relative),
                    path: entry.path().to_path_buf(),
                });
            }
        }
    }

    listing
}

/// Zip entry name for a path relative to the module root
fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Write `entries` into a new zip at `zip_path`
///
/// Entries are stored uncompressed. On Unix the file mode of each source is
/// kept so scripts and binaries stay executable.
pub fn write_zip(zip_path: &Path, entries: &[ArchiveEntry]) -> Result<(), ArchiveError> {
    let zip_err = |e: zip::result::ZipError| ArchiveError::Zip {
        path: zip_path.to_path_buf(),
        error: e.to_string(),
    };

    let file = File::create(zip_path).map_err(|e| ArchiveError::Io {
        path: zip_path.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    for entry in entries {
        let content = std::fs::read(&entry.path).map_err(|e| ArchiveError::Io {
            path: entry.path.clone(),
            error: e.to_string(),
        })?;

        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;

            match std::fs::metadata(&entry.path) {
                Ok(meta) => options.unix_permissions(meta.permissions().mode() & 0o777),
                Err(_) => options,
            }
        };

        zip.start_file(entry.name.as_str(), options).map_err(zip_err)?;
        zip.write_all(&content).map_err(|e| ArchiveError::Io {
            path: zip_path.to_path_buf(),
            error: e.to_string(),
        })?;
        tracing::debug!("Added {} ({} bytes)", entry.name, content.len());
    }

    let mut writer = zip.finish().map_err(zip_err)?;
    writer.flush().map_err(|e| ArchiveError::Io {
        path: zip_path.to_path_buf(),
        error: e.to_string(),
    })?;

    Ok(())
}
