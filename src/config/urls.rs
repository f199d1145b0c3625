//! Upstream Frida release URLs

/// GitHub releases API base for frida (append `/latest` for the newest tag)
pub const FRIDA_RELEASES_API: &str = "https://api.github.com/repos/frida/frida/releases";

/// Release asset download base (GitHub release downloads)
pub const FRIDA_DOWNLOAD: &str = "https://github.com/frida/frida/releases/download";

/// Build the download URL of a `frida-server` archive
pub fn frida_server_url(base: &str, version: &str, file_name: &str) -> String {
    format!("{}/{version}/{file_name}", base.trim_end_matches('/'))
}

/// Name of the xz-compressed `frida-server` asset for a version and architecture
pub fn frida_server_archive(version: &str, arch: &str) -> String {
    format!("frida-server-{version}-android-{arch}.xz")
}
