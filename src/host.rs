//! Host platform identification
//!
//! Uses runner-style identifiers (`linux`, `darwin`, `win32`, `x64`, `arm64`, ...)
//! because the release artifacts and the tool cache layout are keyed on them.

/// Operating system identifier for Windows hosts
pub const WINDOWS: &str = "win32";

/// Operating system identifier for macOS hosts
pub const DARWIN: &str = "darwin";

/// Host operating system and architecture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os: String,
    pub arch: String,
}

impl HostInfo {
    pub fn new(os: &str, arch: &str) -> Self {
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
        }
    }

    /// Describes the machine this binary was compiled for
    pub fn current() -> Self {
        Self::from_rust_consts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Maps `std::env::consts` values onto runner identifiers.
    /// Unknown values pass through unchanged.
    pub fn from_rust_consts(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => DARWIN,
            "windows" => WINDOWS,
            other => other,
        };
        let arch = match arch {
            "x86_64" => "x64",
            "x86" => "ia32",
            "aarch64" => "arm64",
            "powerpc64" => "ppc64",
            other => other,
        };
        Self::new(os, arch)
    }

    pub fn is_windows(&self) -> bool {
        self.os == WINDOWS
    }
}
