use std::path::PathBuf;

use crate::host::{DARWIN, HostInfo};

// =============================================================================
// Release source constants
// =============================================================================

/// Name the tool is registered under in the tool cache
pub const TOOL_NAME: &str = "sysl";

/// GitHub repository publishing the releases
pub const DEFAULT_REPOSITORY: &str = "anz-bank/sysl";

/// Default base URL for GitHub API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default base URL release archives are downloaded from
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://github.com";

/// User agent sent with every request
pub const USER_AGENT: &str = "setup-sysl";

/// Installer configuration, built once at startup and handed to the installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub tool_name: String,
    /// `owner/project`
    pub repository: String,
    pub api_base_url: String,
    pub download_base_url: String,
    /// Scratch space for downloads and extraction
    pub temp_dir: PathBuf,
    /// Root of the tool cache
    pub tool_cache_dir: PathBuf,
    pub github_token: Option<String>,
    pub host: HostInfo,
}

impl InstallerConfig {
    /// Builds a config for `host` using the runner environment for directories
    pub fn from_env(host: HostInfo) -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            temp_dir: temp_dir(&host),
            tool_cache_dir: tool_cache_dir(&host),
            github_token: None,
            host,
        }
    }

    /// Last path segment of the repository, used in artifact file names
    pub fn project(&self) -> &str {
        self.repository
            .rsplit('/')
            .next()
            .unwrap_or(&self.repository)
    }
}

/// Returns the directory used for downloads and extraction.
/// Uses $RUNNER_TEMP if set, otherwise `<base>/actions/temp`.
pub fn temp_dir(host: &HostInfo) -> PathBuf {
    temp_dir_with_env(std::env::var("RUNNER_TEMP").ok(), host, dirs::home_dir())
}

/// Returns the root of the tool cache.
/// Uses $RUNNER_TOOL_CACHE if set, otherwise `<base>/actions/cache`.
pub fn tool_cache_dir(host: &HostInfo) -> PathBuf {
    tool_cache_dir_with_env(
        std::env::var("RUNNER_TOOL_CACHE").ok(),
        host,
        dirs::home_dir(),
    )
}

fn temp_dir_with_env(
    runner_temp: Option<String>,
    host: &HostInfo,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    runner_dir_with_env(runner_temp, host, home_dir, "temp")
}

fn tool_cache_dir_with_env(
    runner_tool_cache: Option<String>,
    host: &HostInfo,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    runner_dir_with_env(runner_tool_cache, host, home_dir, "cache")
}

fn runner_dir_with_env(
    from_env: Option<String>,
    host: &HostInfo,
    home_dir: Option<PathBuf>,
    leaf: &str,
) -> PathBuf {
    from_env
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| base_location(host, home_dir).join("actions").join(leaf))
}

fn base_location(host: &HostInfo, home_dir: Option<PathBuf>) -> PathBuf {
    if host.is_windows() {
        home_dir.unwrap_or_else(|| PathBuf::from("C:\\"))
    } else if host.os == DARWIN {
        PathBuf::from("/Users")
    } else {
        PathBuf::from("/home")
    }
}
