//! Frida release metadata
//!
//! Looks up the newest frida tag from the GitHub releases API.

pub mod client;

pub use client::{LatestRelease, ReleaseClient};
