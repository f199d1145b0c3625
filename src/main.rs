//! magiskfrida CLI - Magisk module builder for frida-server
//!
//! Entry point for the magiskfrida command-line application.

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use magiskfrida::cli::output::display_error;
use magiskfrida::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber from RUST_LOG, warn when unset
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
