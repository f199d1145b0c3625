//! Tool directory layout
//!
//! All paths are relative to the tool home: the template tree (`base/`),
//! the download cache (`downloads/`) and the build output (`builds/`).
//!
//! Environment variables can override defaults:
//! - `MAGISKFRIDA_HOME` - Override the tool home directory

use std::env;
use std::path::{Path, PathBuf};

use crate::config::defaults;

/// Environment variable naming the tool home directory
pub const ENV_HOME: &str = "MAGISKFRIDA_HOME";

/// Resolved directory layout for a run
#[derive(Debug, Clone)]
pub struct ToolDirs {
    home: PathBuf,
}

impl ToolDirs {
    /// Resolve the layout from the environment
    ///
    /// Falls back to the directory containing the executable when it holds a
    /// template tree, otherwise to the current directory.
    pub fn new() -> Self {
        Self {
            home: Self::resolve_home(),
        }
    }

    /// Use an explicit home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Tool home directory
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Template tree copied into every module
    pub fn base_module_dir(&self) -> PathBuf {
        self.home.join(defaults::BASE_MODULE_DIR)
    }

    /// Download cache directory
    pub fn downloads_dir(&self) -> PathBuf {
        self.home.join(defaults::DOWNLOADS_DIR)
    }

    /// Build output directory
    pub fn builds_dir(&self) -> PathBuf {
        self.home.join(defaults::BUILDS_DIR)
    }

    /// Assembled module directory for an architecture
    pub fn module_dir(&self, arch: &str) -> PathBuf {
        self.builds_dir().join(arch)
    }

    /// Flashable zip path for an architecture
    pub fn module_zip(&self, arch: &str) -> PathBuf {
        self.builds_dir()
            .join(format!("{}-{arch}.zip", defaults::MODULE_ZIP_PREFIX))
    }

    fn resolve_home() -> PathBuf {
        if let Ok(path) = env::var(ENV_HOME) {
            return PathBuf::from(path);
        }

        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .filter(|dir| dir.join(defaults::BASE_MODULE_DIR).is_dir())
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for ToolDirs {
    fn default() -> Self {
        Self::new()
    }
}
