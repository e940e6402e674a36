//! Download URL of a release archive for the host platform

use crate::config::InstallerConfig;
use crate::host::HostInfo;

/// Display name used in artifact file names; unknown identifiers pass through
pub fn platform_name(os: &str) -> &str {
    match os {
        "darwin" => "macOS",
        "freebsd" => "FreeBSD",
        "linux" => "Linux",
        "openbsd" => "OpenBSD",
        "win32" => "Windows",
        other => other,
    }
}

/// Bit width label of the artifact
pub fn arch_bits(arch: &str) -> &'static str {
    if arch == "x64" { "64" } else { "32" }
}

/// Archive extension published for the host platform
pub fn archive_extension(host: &HostInfo) -> &'static str {
    if host.is_windows() { "zip" } else { "tar.gz" }
}

/// Artifact file name, e.g. `sysl_0.27.1_Linux-64bit.tar.gz`
pub fn archive_file_name(project: &str, version: &str, host: &HostInfo) -> String {
    format!(
        "{}_{}_{}-{}bit.{}",
        project,
        version,
        platform_name(&host.os),
        arch_bits(&host.arch),
        archive_extension(host)
    )
}

/// URL of the archive for `version` on the configured host
///
/// # Arguments
/// * `version` - A normalized version, e.g. "1.2.0"
pub fn download_url(config: &InstallerConfig, version: &str) -> String {
    format!(
        "{}/{}/releases/download/v{}/{}",
        config.download_base_url.trim_end_matches('/'),
        config.repository,
        version,
        archive_file_name(config.project(), version, &config.host)
    )
}
