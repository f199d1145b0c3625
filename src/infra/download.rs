//! HTTP download functionality
//!
//! Downloads release assets into a flat cache keyed by file name. A file that
//! already exists in the cache is reused as-is; no request is made for it.
//! Fresh downloads get a `<name>.sha256` sidecar holding their digest.

use futures::StreamExt;
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::DownloadError;

/// Progress callback type for download progress reporting
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// What the download step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Destination already existed and was left untouched
    Cached { path: PathBuf },
    /// File was fetched from the network
    Downloaded {
        path: PathBuf,
        /// Size in bytes
        size: u64,
        /// SHA256 checksum of the downloaded content
        checksum: String,
    },
}

impl DownloadOutcome {
    /// Whether the cache was hit
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached { .. })
    }
}

/// Download manager for fetching release assets
#[derive(Debug, Clone)]
pub struct DownloadManager {
    /// HTTP client
    client: reqwest::Client,
}

impl DownloadManager {
    /// Create a new download manager
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(defaults::USER_AGENT)
                .connect_timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download `url` to `dest` unless `dest` already exists
    ///
    /// # Arguments
    /// * `url` - URL to download from (redirects are followed)
    /// * `dest` - Destination path
    /// * `progress` - Optional progress callback (`bytes_downloaded`, `total_bytes`)
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<DownloadOutcome, DownloadError> {
        if dest.exists() {
            tracing::debug!("Using cached {}", dest.display());
            check_sidecar(dest);
            return Ok(DownloadOutcome::Cached {
                path: dest.to_path_buf(),
            });
        }

        match self.download_once(url, dest, progress.as_ref()).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // Leave nothing behind that a later run would treat as cached
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }

    async fn download_once(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<DownloadOutcome, DownloadError> {
        tracing::info!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DownloadError::NetworkError {
                url: url.to_string(),
                error: format!("HTTP {}", response.status()),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        // Create parent directories if needed
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
        }

        let mut file = File::create(dest)
            .await
            .map_err(|e| DownloadError::IoError {
                path: dest.to_path_buf(),
                error: e.to_string(),
            })?;

        let mut hasher = Sha256::new();
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            hasher.update(&chunk);
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| DownloadError::IoError {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        let checksum = hex::encode(hasher.finalize());
        let sidecar = checksum_path(dest);
        tokio::fs::write(&sidecar, format!("{checksum}\n"))
            .await
            .map_err(|e| DownloadError::IoError {
                path: sidecar,
                error: e.to_string(),
            })?;

        tracing::debug!("Downloaded {downloaded} bytes, sha256 {checksum}");

        Ok(DownloadOutcome::Downloaded {
            path: dest.to_path_buf(),
            size: downloaded,
            checksum,
        })
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the checksum sidecar for a cached file
pub fn checksum_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".sha256");
    path.with_file_name(name)
}

/// Compare a cached file against its sidecar, warning on mismatch
///
/// The file is reused either way.
fn check_sidecar(path: &Path) {
    let Ok(recorded) = std::fs::read_to_string(checksum_path(path)) else {
        return;
    };

    match verify_checksum(path, recorded.trim()) {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(
                "Cached file {} does not match its recorded checksum; delete it to re-download",
                path.display()
            );
        }
        Err(e) => tracing::warn!("{e}"),
    }
}

/// Verify SHA256 checksum of a file
pub fn verify_checksum(path: &Path, expected: &str) -> Result<bool, DownloadError> {
    let content = std::fs::read(path).map_err(|e| DownloadError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    Ok(compute_checksum(&content) == expected.to_lowercase())
}

/// Compute SHA256 checksum of data
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
