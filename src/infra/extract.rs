//! xz decompression
//!
//! Release assets are single-member xz streams wrapping one binary.

use std::io::Read;
use std::path::Path;

use xz2::read::XzDecoder;

use crate::error::ExtractError;

/// Decompress an xz archive into `dest`
///
/// The whole stream is decoded into memory before anything is written, so a
/// malformed archive never leaves a truncated output behind. Parent
/// directories of `dest` are created as needed.
pub fn extract_xz(archive: &Path, dest: &Path) -> Result<u64, ExtractError> {
    let file = std::fs::File::open(archive).map_err(|e| ExtractError::Io {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut content = Vec::new();
    XzDecoder::new(file)
        .read_to_end(&mut content)
        .map_err(|e| ExtractError::Decode {
            path: archive.to_path_buf(),
            error: e.to_string(),
        })?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ExtractError::Io {
            path: parent.to_path_buf(),
            error: e.to_string(),
        })?;
    }

    std::fs::write(dest, &content).map_err(|e| ExtractError::Io {
        path: dest.to_path_buf(),
        error: e.to_string(),
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(dest, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
            ExtractError::Io {
                path: dest.to_path_buf(),
                error: e.to_string(),
            }
        })?;
    }

    tracing::debug!(
        "Extracted {} bytes from {} to {}",
        content.len(),
        archive.display(),
        dest.display()
    );

    Ok(content.len() as u64)
}
