//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod build;
pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults;

/// Build flashable Magisk modules bundling frida-server
#[derive(Parser, Debug)]
#[command(name = "magiskfrida")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The arch to be built (one or more of arm/arm64/x86/x86_64) [default: arm, arm64]
    #[arg(short = 'a', long = "arch", value_name = "ARCH")]
    pub archs: Vec<String>,

    /// The frida version to be built [default: latest release]
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub versions: Vec<String>,
}

impl Cli {
    /// Requested architectures, or the defaults when none were given
    pub fn archs(&self) -> Vec<String> {
        if self.archs.is_empty() {
            defaults::DEFAULT_ARCHS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            self.archs.clone()
        }
    }

    /// Execute the build
    pub async fn run(self) -> Result<()> {
        let archs = self.archs();
        build::execute(archs, self.versions).await
    }
}
