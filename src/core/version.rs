//! Frida version resolution
//!
//! Explicit versions are used as given. With none, the latest release tag
//! becomes the only version.

use crate::error::ReleaseError;
use crate::release::ReleaseClient;

/// Resolve the versions to build
///
/// Returns `requested` unchanged when it is non-empty, otherwise exactly one
/// request is made to the latest-release endpoint and its tag is returned as
/// the sole version.
pub async fn resolve_versions(
    requested: Vec<String>,
    client: &ReleaseClient,
) -> Result<Vec<String>, ReleaseError> {
    if !requested.is_empty() {
        return Ok(requested);
    }

    let release = client.latest().await?;
    println!("Latest frida version is {}.", release.tag_name);
    Ok(vec![release.tag_name])
}
