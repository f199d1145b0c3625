//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars and
//! formatted messages to the user.

use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};

use crate::infra::download::ProgressCallback;

/// Create a progress bar for downloads
///
/// The length is unknown until the response headers arrive; the progress
/// callback fills it in. The bar clears itself once dropped.
pub fn create_download_bar() -> ProgressBar {
    let pb = ProgressBar::new(0).with_finish(ProgressFinish::AndClear);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Adapt a progress bar into a download progress callback
pub fn progress_callback(bar: ProgressBar) -> ProgressCallback {
    Box::new(move |downloaded, total| {
        if total > 0 && bar.length() != Some(total) {
            bar.set_length(total);
        }
        bar.set_position(downloaded);
    })
}

/// Progress reporter for one download, drawn as a fresh bar
pub fn download_progress() -> ProgressCallback {
    progress_callback(create_download_bar())
}

/// Print an error and its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_callback_tracks_length_and_position() {
        let bar = create_download_bar();
        let callback = progress_callback(bar.clone());

        callback(10, 100);
        assert_eq!(bar.length(), Some(100));
        assert_eq!(bar.position(), 10);

        callback(100, 100);
        assert_eq!(bar.position(), 100);
    }

    #[test]
    fn test_progress_callback_unknown_length() {
        let bar = create_download_bar();
        let callback = progress_callback(bar.clone());

        callback(42, 0);

        assert_eq!(bar.position(), 42);
        assert_eq!(bar.length(), Some(0));
    }

    #[test]
    fn test_download_progress_accepts_updates() {
        let callback = download_progress();

        callback(0, 0);
        callback(5, 10);
        callback(10, 10);
    }
}
