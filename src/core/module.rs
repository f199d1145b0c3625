//! Module assembly
//!
//! Builds one flashable module per architecture: copy the template tree,
//! write the generated files, fetch and unpack each requested frida-server
//! and zip the result.

use std::path::PathBuf;

use crate::config::{defaults, urls};
use crate::core::{archive, module_prop, service};
use crate::error::ModuleError;
use crate::infra::dirs::ToolDirs;
use crate::infra::download::{DownloadManager, DownloadOutcome, ProgressCallback};
use crate::infra::{extract, filesystem};
use crate::release::ReleaseClient;

/// Creates a progress reporter for one download
pub type ProgressFactory = fn() -> ProgressCallback;

/// Everything a build needs besides its inputs
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Directory layout
    pub dirs: ToolDirs,
    /// Release URLs and metadata
    pub releases: ReleaseClient,
    /// Cached downloader
    pub downloads: DownloadManager,
    /// Progress reporting for downloads, none when unset
    pub progress: Option<ProgressFactory>,
}

impl BuildContext {
    /// Create a context with default clients for `dirs`
    pub fn new(dirs: ToolDirs) -> Self {
        Self {
            dirs,
            releases: ReleaseClient::new(),
            downloads: DownloadManager::new(),
            progress: None,
        }
    }

    /// Replace the release client
    #[must_use]
    pub fn with_releases(mut self, releases: ReleaseClient) -> Self {
        self.releases = releases;
        self
    }

    /// Report download progress through `factory`
    #[must_use]
    pub fn with_progress(mut self, factory: ProgressFactory) -> Self {
        self.progress = Some(factory);
        self
    }
}

/// Result of building one architecture
#[derive(Debug)]
pub struct ModuleBuild {
    /// Target architecture
    pub arch: String,
    /// Assembled module directory
    pub module_dir: PathBuf,
    /// Flashable zip
    pub zip_path: PathBuf,
    /// Names written into the zip
    pub entries: Vec<String>,
    /// Expected paths that were missing and left out
    pub missing: Vec<PathBuf>,
}

/// Build modules for every architecture, in order
pub async fn build_all(
    ctx: &BuildContext,
    archs: &[String],
    versions: &[String],
) -> Result<Vec<ModuleBuild>, ModuleError> {
    filesystem::create_dir_all(&ctx.dirs.downloads_dir())?;
    filesystem::create_dir_all(&ctx.dirs.builds_dir())?;

    let mut builds = Vec::with_capacity(archs.len());
    for arch in archs {
        builds.push(build_module(ctx, arch, versions).await?);
    }
    Ok(builds)
}

/// Build the module for a single architecture
///
/// Any previous module directory and zip for `arch` are removed first.
/// The service script starts the first of `versions`.
pub async fn build_module(
    ctx: &BuildContext,
    arch: &str,
    versions: &[String],
) -> Result<ModuleBuild, ModuleError> {
    let first_version = versions.first().ok_or(ModuleError::NoVersions)?;

    let module_dir = ctx.dirs.module_dir(arch);
    let zip_path = ctx.dirs.module_zip(arch);
    tracing::info!("Building {arch} module in {}", module_dir.display());

    filesystem::remove_dir_all(&module_dir)?;
    filesystem::remove_file(&zip_path)?;
    filesystem::copy_dir_all(&ctx.dirs.base_module_dir(), &module_dir)?;

    filesystem::write_unix_text(
        &module_dir.join(defaults::MODULE_PROP_PATH),
        &module_prop::render(),
    )?;

    for version in versions {
        let archive_name = urls::frida_server_archive(version, arch);
        let archive_path = ctx.dirs.downloads_dir().join(&archive_name);
        let url = ctx.releases.server_archive_url(version, arch);

        println!(
            "Downloading '{archive_name}' to '{}'.",
            archive_path.display()
        );
        let progress = ctx.progress.map(|factory| factory());
        match ctx.downloads.download(&url, &archive_path, progress).await? {
            DownloadOutcome::Cached { .. } => println!("Exists."),
            DownloadOutcome::Downloaded { .. } => println!("Done."),
        }

        let server_path = module_dir
            .join(defaults::SERVER_BIN_DIR)
            .join(format!("frida-server.{version}"));
        println!(
            "Extracting '{archive_name}' to 'frida-server.{version}'."
        );
        extract::extract_xz(&archive_path, &server_path)?;
    }

    filesystem::write_unix_text(
        &module_dir.join(defaults::SERVICE_SCRIPT_PATH),
        &service::render(first_version),
    )?;

    println!("Building Magisk module.");
    let listing = archive::collect_entries(&module_dir);
    for path in &listing.missing {
        tracing::warn!("File {} does not exist, skipping", path.display());
    }
    archive::write_zip(&zip_path, &listing.entries)?;

    Ok(ModuleBuild {
        arch: arch.to_string(),
        module_dir,
        zip_path,
        entries: listing.entries.into_iter().map(|e| e.name).collect(),
        missing: listing.missing,
    })
}
