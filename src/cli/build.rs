//! CLI implementation of the module build
//!
//! Resolves versions, builds one module per architecture and reports the
//! produced zips.

use anyhow::{Context, Result};

use crate::cli::output::{self, status};
use crate::config::defaults;
use crate::core::module::{build_all, BuildContext};
use crate::core::version::resolve_versions;
use crate::infra::dirs::ToolDirs;

/// Execute the build for `archs` and `versions`
pub async fn execute(archs: Vec<String>, versions: Vec<String>) -> Result<()> {
    let ctx = BuildContext::new(ToolDirs::new()).with_progress(output::download_progress);
    execute_with(&ctx, archs, versions).await
}

/// Execute the build with an explicit context
pub async fn execute_with(
    ctx: &BuildContext,
    archs: Vec<String>,
    versions: Vec<String>,
) -> Result<()> {
    for arch in &archs {
        if !defaults::KNOWN_ARCHS.contains(&arch.as_str()) {
            tracing::warn!(
                "Unknown arch '{arch}', expected one of {}",
                defaults::KNOWN_ARCHS.join("/")
            );
        }
    }

    println!("[*] archs       {archs:?}");
    println!("[*] versions    {versions:?}");
    tracing::debug!("Tool home: {}", ctx.dirs.home().display());

    let versions = resolve_versions(versions, &ctx.releases)
        .await
        .context("Failed to resolve frida version")?;

    let builds = build_all(ctx, &archs, &versions)
        .await
        .context("Failed to build Magisk module")?;

    for build in &builds {
        println!(
            "{} {} ({} files)",
            status::SUCCESS,
            build.zip_path.display(),
            build.entries.len()
        );
        if !build.missing.is_empty() {
            println!(
                "{} {} expected paths were missing",
                status::WARNING,
                build.missing.len()
            );
        }
    }

    println!("Done.");
    Ok(())
}
