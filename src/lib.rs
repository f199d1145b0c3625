//! magiskfrida - Magisk module builder for frida-server
//!
//! Downloads prebuilt frida-server releases and packages them as flashable
//! Magisk modules, one per Android architecture.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Module assembly logic
//! - [`release`] - Frida release metadata client
//! - [`infra`] - Infrastructure layer (network, filesystem, decompression)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod release;

#[cfg(test)]
pub mod test_utils;
