//! Release client implementation
//!
//! Fetches release metadata from the GitHub releases API.

use serde::Deserialize;

use crate::config::{defaults, urls};
use crate::error::ReleaseError;

/// Environment variable overriding the releases API base URL
pub const ENV_RELEASES_API: &str = "MAGISKFRIDA_RELEASES_API";

/// Environment variable overriding the release download base URL
pub const ENV_DOWNLOAD_URL: &str = "MAGISKFRIDA_DOWNLOAD_URL";

/// Subset of the GitHub release document we use
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LatestRelease {
    /// Release tag, e.g. `16.1.4`
    pub tag_name: String,
}

/// Client for frida release metadata and asset URLs
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    /// HTTP client
    client: reqwest::Client,
    /// Releases API base URL
    api_url: String,
    /// Release asset download base URL
    download_url: String,
}

impl ReleaseClient {
    /// Create a release client with default URLs, honoring env overrides
    pub fn new() -> Self {
        Self::with_urls(
            std::env::var(ENV_RELEASES_API).unwrap_or_else(|_| urls::FRIDA_RELEASES_API.to_string()),
            std::env::var(ENV_DOWNLOAD_URL).unwrap_or_else(|_| urls::FRIDA_DOWNLOAD.to_string()),
        )
    }

    /// Create a release client with custom URLs
    pub fn with_urls(api_url: String, download_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(defaults::USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_url,
            download_url,
        }
    }

    /// URL of the `frida-server` archive for a version and architecture
    pub fn server_archive_url(&self, version: &str, arch: &str) -> String {
        urls::frida_server_url(
            &self.download_url,
            version,
            &urls::frida_server_archive(version, arch),
        )
    }

    /// Fetch the latest published release
    pub async fn latest(&self) -> Result<LatestRelease, ReleaseError> {
        let url = format!("{}/latest", self.api_url.trim_end_matches('/'));
        tracing::info!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| ReleaseError::Request {
                url: url.clone(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ReleaseError::Request {
                url,
                error: format!("HTTP {}", response.status()),
            });
        }

        response
            .json::<LatestRelease>()
            .await
            .map_err(|e| ReleaseError::Parse {
                url,
                error: e.to_string(),
            })
    }
}

impl Default for ReleaseClient {
    fn default() -> Self {
        Self::new()
    }
}
