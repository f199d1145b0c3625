//! Error types for magiskfrida
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Decompression errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input is not a valid xz stream
    #[error("Failed to decode '{path}': {error}")]
    Decode { path: PathBuf, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Release metadata errors
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Request failed or returned a non-success status
    #[error("Failed to fetch release info from '{url}': {error}")]
    Request { url: String, error: String },

    /// Response body could not be parsed
    #[error("Invalid release info from '{url}': {error}")]
    Parse { url: String, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to copy a file or directory tree
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Source directory does not exist
    #[error("Directory not found: {path}")]
    NotFound { path: PathBuf },
}

/// Zip packaging errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// IO error while reading inputs or writing the archive
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Zip writer error
    #[error("Failed to write zip '{path}': {error}")]
    Zip { path: PathBuf, error: String },
}

/// Top-level module build error type
#[derive(Error, Debug)]
pub enum ModuleError {
    /// Download error
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Extraction error
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Release lookup error
    #[error("Release error: {0}")]
    Release(#[from] ReleaseError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Archive error
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// No versions were requested or resolved
    #[error("No frida versions to build")]
    NoVersions,
}
