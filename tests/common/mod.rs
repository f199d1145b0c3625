//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test home context
///
/// Creates a temporary tool home with a module template and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory used as the tool home
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new tool home in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a tool home with a minimal module template under `base/`
    pub fn with_template() -> Self {
        let project = Self::new();
        project.create_file("base/install.sh", "SKIPMOUNT=false\n");
        project.create_file("base/common/placeholder", "");
        project.create_file("base/common/post-fs-data.sh", "#!/system/bin/sh\n");
        project.create_file("base/system/bin/mfe", "#!/system/bin/sh\n");
        project.create_file("base/system/bin/placeholder", "");
        project.create_file("base/META-INF/com/google/android/updater-script", "#MAGISK\n");
        project.create_file("base/META-INF/com/google/android/update-binary", "#!/sbin/sh\n");
        project
    }

    /// Get the path to the tool home
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the tool home
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the tool home
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the tool home
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Names of all entries in a zip under the tool home
    pub fn zip_entries(&self, name: &str) -> Vec<String> {
        let file = std::fs::File::open(self.dir.path().join(name)).expect("Failed to open zip");
        let archive = zip::ZipArchive::new(file).expect("Failed to read zip");
        archive.file_names().map(ToString::to_string).collect()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// xz-compress `data` the way frida release assets are packed
#[allow(dead_code)]
pub fn xz_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).expect("Failed to compress");
    encoder.finish().expect("Failed to finish xz stream")
}

/// Command for the magiskfrida binary bound to a tool home and mock endpoints
pub fn magiskfrida_command(project: &TestProject, server_uri: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_magiskfrida"));
    cmd.current_dir(project.path())
        .env("MAGISKFRIDA_HOME", project.path())
        .env("MAGISKFRIDA_RELEASES_API", server_uri)
        .env("MAGISKFRIDA_DOWNLOAD_URL", format!("{server_uri}/download"))
        .env_remove("RUST_LOG")
        .args(args);
    cmd
}

/// Run the magiskfrida binary against a tool home and mock endpoints
pub fn run_magiskfrida(project: &TestProject, server_uri: &str, args: &[&str]) -> Output {
    magiskfrida_command(project, server_uri, args)
        .output()
        .expect("Failed to execute magiskfrida")
}
