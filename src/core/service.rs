//! `common/service.sh` generation
//!
//! Magisk runs this script in late-start service mode. It starts the
//! selected frida-server through the `mfe` launcher.

/// Launcher invoked by the service script
pub const LAUNCHER: &str = "mfe";

const SERVICE_TEMPLATE: &str = r#"#!/system/bin/sh
# Do NOT assume where your module will be located.
# ALWAYS use $MODDIR if you need to know where this script
# and module is placed.
# This will make sure your module will still work
# if Magisk change its mount point in the future
MODDIR=${0%/*}

# This script will be executed in late_start service mode
"#;

/// Render the service script selecting `version` at boot
pub fn render(version: &str) -> String {
    format!("{SERVICE_TEMPLATE}{LAUNCHER} {version}\n")
}
