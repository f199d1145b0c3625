//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a frida-style release tag (`major.minor.patch`, major >= 10)
    pub fn frida_version() -> impl Strategy<Value = String> {
        (10u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate an architecture identifier
    pub fn arch() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("arm".to_string()),
            Just("arm64".to_string()),
            Just("x86".to_string()),
            Just("x86_64".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::KNOWN_ARCHS;
    use crate::config::urls::frida_server_archive;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_frida_version_has_three_numeric_parts(version in frida_version()) {
            let parts: Vec<&str> = version.split('.').collect();
            prop_assert_eq!(parts.len(), 3);
            for part in parts {
                prop_assert!(part.parse::<u32>().is_ok());
            }
        }

        #[test]
        fn test_archive_name_embeds_version_and_arch(version in frida_version(), arch in arch()) {
            prop_assert!(KNOWN_ARCHS.contains(&arch.as_str()));
            let name = frida_server_archive(&version, &arch);
            let prefix = format!("frida-server-{version}-android-");
            let suffix = format!("-{arch}.xz");
            prop_assert!(name.starts_with(&prefix));
            prop_assert!(name.ends_with(&suffix));
        }
    }
}
