//! `module.prop` generation
//!
//! Magisk reads module metadata from a flat `key=value` file at the module
//! root. All values are fixed; the module version does not follow the
//! bundled frida version.

use crate::config::defaults::module;

/// Render the module property listing
pub fn render() -> String {
    let version_code = module::VERSION.replace('.', "");
    [
        format!("id={}", module::ID),
        format!("name={}", module::NAME),
        format!("version=v{}", module::VERSION),
        format!("versionCode={version_code}"),
        format!("author={}", module::AUTHOR),
        format!("description={}", module::DESCRIPTION),
        format!("support={}", module::SUPPORT),
        format!("minMagisk={}", module::MIN_MAGISK),
    ]
    .join("\n")
}
