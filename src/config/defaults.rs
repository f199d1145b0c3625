//! Default configuration values

/// Architectures built when no `--arch` is given
pub const DEFAULT_ARCHS: &[&str] = &["arm", "arm64"];

/// Architectures frida publishes android server builds for
pub const KNOWN_ARCHS: &[&str] = &["arm", "arm64", "x86", "x86_64"];

/// Template directory copied into every module
pub const BASE_MODULE_DIR: &str = "base";

/// Flat download cache directory
pub const DOWNLOADS_DIR: &str = "downloads";

/// Output directory for assembled modules and zips
pub const BUILDS_DIR: &str = "builds";

/// Prefix of the flashable zip name (`<prefix>-<arch>.zip`)
pub const MODULE_ZIP_PREFIX: &str = "MagiskFridaEnv";

/// Root-level files placed in the zip
pub const ROOT_FILES: &[&str] = &["install.sh", "module.prop"];

/// Template subdirectories placed in the zip
pub const PACKAGED_DIRS: &[&str] = &["common", "system", "META-INF"];

/// Marker files kept only to preserve empty directories in the template
pub const IGNORED_FILES: &[&str] = &["placeholder", ".gitkeep"];

/// Where extracted servers land inside the module (`<dir>/frida-server.<version>`)
pub const SERVER_BIN_DIR: &str = "system/bin";

/// Late-start service script path inside the module
pub const SERVICE_SCRIPT_PATH: &str = "common/service.sh";

/// Module property file path inside the module
pub const MODULE_PROP_PATH: &str = "module.prop";

/// Magisk module metadata
pub mod module {
    pub const ID: &str = "magiskfridaenv";
    pub const NAME: &str = "MagiskFridaEnv";
    pub const VERSION: &str = "0.0.1";
    pub const AUTHOR: &str = "toolsRE";
    pub const DESCRIPTION: &str = "Forked from AeonLucid/MagiskFrida. Runs frida-server on boot as root with magisk. And select the version.";
    pub const SUPPORT: &str = "https://github.com/toolsRE/MagiskFridaEnv/issues";
    pub const MIN_MAGISK: u32 = 1530;
}

/// HTTP user agent (the GitHub API rejects requests without one)
pub const USER_AGENT: &str = concat!("magiskfrida/", env!("CARGO_PKG_VERSION"));

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
