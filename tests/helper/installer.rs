//! Installer test utilities

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use setup_sysl::config::InstallerConfig;
use setup_sysl::host::HostInfo;
use setup_sysl::install::installer::Installer;
use setup_sysl::install::search_path::RunnerPath;
use setup_sysl::install::toolchain::Toolchain;
use setup_sysl::release::github::GitHubReleases;

/// Toolchain that is never installed
pub struct NoToolchain;

#[async_trait]
impl Toolchain for NoToolchain {
    async fn bin_dir(&self) -> Option<PathBuf> {
        None
    }
}

/// Runner directories and config pointing every endpoint at a mock server
pub struct TestEnv {
    _dir: TempDir,
    pub config: InstallerConfig,
    pub github_path: PathBuf,
}

impl TestEnv {
    pub fn new(server_url: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = InstallerConfig::from_env(HostInfo::new("linux", "x64"));
        config.api_base_url = server_url.to_string();
        config.download_base_url = server_url.to_string();
        config.temp_dir = dir.path().join("temp");
        config.tool_cache_dir = dir.path().join("tools");
        let github_path = dir.path().join("github_path");
        Self {
            _dir: dir,
            config,
            github_path,
        }
    }

    /// Installer wired with the real GitHub source and runner path
    pub fn installer(&self) -> Installer {
        let source = GitHubReleases::new(&self.config.api_base_url).unwrap();
        Installer::new(
            self.config.clone(),
            Arc::new(source),
            Arc::new(RunnerPath::new(Some(self.github_path.clone()))),
            Arc::new(NoToolchain),
        )
        .unwrap()
    }

    pub fn tool_dir(&self, version: &str) -> PathBuf {
        self.config.tool_cache_dir.join("sysl").join(version).join("x64")
    }

    /// Lines written to the `$GITHUB_PATH` file, empty if it was never created
    pub fn published_paths(&self) -> Vec<PathBuf> {
        std::fs::read_to_string(&self.github_path)
            .map(|content| content.lines().map(PathBuf::from).collect())
            .unwrap_or_default()
    }
}
