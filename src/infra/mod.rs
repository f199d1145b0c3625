//! Infrastructure layer
//!
//! Handles all I/O operations: network, filesystem and decompression.

pub mod dirs;
pub mod download;
pub mod extract;
pub mod filesystem;
