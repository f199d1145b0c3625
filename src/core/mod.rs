//! Core business logic module
//!
//! # Submodules
//!
//! - [`version`] - Frida version resolution
//! - [`module_prop`] - `module.prop` rendering
//! - [`service`] - Late-start service script rendering
//! - [`archive`] - Flashable zip packaging
//! - [`module`] - Per-architecture module assembly

pub mod archive;
pub mod module;
pub mod module_prop;
pub mod service;
pub mod version;
