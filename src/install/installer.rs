use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::InstallerConfig;
use crate::install::archive::{extract_tar, extract_zip};
use crate::install::cache::ToolCache;
use crate::install::download::Downloader;
use crate::install::error::{DownloadError, InstallError};
use crate::install::search_path::SearchPath;
use crate::install::toolchain::Toolchain;
use crate::release::error::ResolveError;
use crate::release::resolver::resolve;
use crate::release::source::ReleaseSource;
use crate::release::types::Release;
use crate::release::url::download_url;

/// Resolves, downloads, caches and publishes a tool release
pub struct Installer {
    config: InstallerConfig,
    source: Arc<dyn ReleaseSource>,
    search_path: Arc<dyn SearchPath>,
    toolchain: Arc<dyn Toolchain>,
    cache: ToolCache,
    downloader: Downloader,
}

impl Installer {
    pub fn new(
        config: InstallerConfig,
        source: Arc<dyn ReleaseSource>,
        search_path: Arc<dyn SearchPath>,
        toolchain: Arc<dyn Toolchain>,
    ) -> Result<Self, reqwest::Error> {
        let cache = ToolCache::new(&config.tool_cache_dir);
        Ok(Self {
            config,
            source,
            search_path,
            toolchain,
            cache,
            downloader: Downloader::new()?,
        })
    }

    /// Install the release matching `spec` and put it on the search path
    ///
    /// # Arguments
    /// * `spec` - A version match string: semver (1.2.0), partial (1.2) or x-trailing (1.2.x)
    ///
    /// # Returns
    /// The cached tool directory that was published
    pub async fn install(&self, spec: &str) -> Result<PathBuf, InstallError> {
        let tags = self
            .source
            .fetch_tags(&self.config.repository)
            .await
            .map_err(ResolveError::from)?;
        let release = resolve(spec, &tags)?;
        info!("Getting {} version: {}", self.config.tool_name, release.version);

        let tool_path = match self.cache.find(
            &self.config.tool_name,
            &release.version,
            &self.config.host.arch,
        ) {
            Some(path) => path,
            None => self
                .download(&release)
                .await
                .map_err(|source| InstallError::Download {
                    version: release.version.clone(),
                    source,
                })?,
        };
        info!("{} cached under {}", self.config.tool_name, tool_path.display());

        self.search_path
            .add_path(&tool_path)
            .map_err(InstallError::SearchPath)?;
        self.publish_toolchain_bin().await;

        Ok(tool_path)
    }

    async fn download(&self, release: &Release) -> Result<PathBuf, DownloadError> {
        std::fs::create_dir_all(&self.config.temp_dir)?;
        // Removed on drop, whether or not caching succeeds
        let staging = tempfile::Builder::new()
            .prefix("setup-sysl.")
            .tempdir_in(&self.config.temp_dir)?;

        let url = download_url(&self.config, &release.version);
        let archive = self.downloader.download_tool(&url, staging.path()).await?;

        let extracted = staging.path().join("extracted");
        if self.config.host.is_windows() {
            extract_zip(&archive, &extracted)?;
        } else {
            extract_tar(&archive, &extracted)?;
        }

        let cached = self.cache.cache_dir(
            &extracted,
            &self.config.tool_name,
            &release.version,
            &self.config.host.arch,
        )?;
        Ok(cached)
    }

    async fn publish_toolchain_bin(&self) {
        let Some(bin_dir) = self.toolchain.bin_dir().await else {
            return;
        };
        debug!("Publishing toolchain bin directory {}", bin_dir.display());
        if let Err(e) = self.search_path.add_path(&bin_dir) {
            warn!("Failed to add {} to the search path: {}", bin_dir.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    use mockito::{Server, ServerGuard};
    use tempfile::TempDir;

    use crate::host::HostInfo;
    use crate::install::archive::fixtures;
    use crate::install::toolchain::MockToolchain;
    use crate::release::error::RegistryError;
    use crate::release::source::MockReleaseSource;
    use crate::release::types::ReleaseTag;

    #[derive(Default)]
    struct RecordingPath {
        dirs: Mutex<Vec<PathBuf>>,
    }

    impl RecordingPath {
        fn dirs(&self) -> Vec<PathBuf> {
            self.dirs.lock().unwrap().clone()
        }
    }

    impl SearchPath for RecordingPath {
        fn add_path(&self, dir: &Path) -> std::io::Result<()> {
            self.dirs.lock().unwrap().push(dir.to_path_buf());
            Ok(())
        }
    }

    struct Fixture {
        _dirs: TempDir,
        config: InstallerConfig,
        search_path: Arc<RecordingPath>,
    }

    impl Fixture {
        fn new(server: &ServerGuard, os: &str) -> Self {
            let dirs = TempDir::new().unwrap();
            let mut config = InstallerConfig::from_env(HostInfo::new(os, "x64"));
            config.download_base_url = server.url();
            config.temp_dir = dirs.path().join("temp");
            config.tool_cache_dir = dirs.path().join("tools");
            Self {
                _dirs: dirs,
                config,
                search_path: Arc::new(RecordingPath::default()),
            }
        }

        fn installer(&self, source: MockReleaseSource, toolchain: MockToolchain) -> Installer {
            Installer::new(
                self.config.clone(),
                Arc::new(source),
                self.search_path.clone(),
                Arc::new(toolchain),
            )
            .unwrap()
        }

        fn tool_dir(&self, version: &str) -> PathBuf {
            self.config.tool_cache_dir.join("sysl").join(version).join("x64")
        }
    }

    fn sysl_source() -> MockReleaseSource {
        let tags = vec![
            ReleaseTag::new("v1.1.0", true),
            ReleaseTag::new("v1.0.0", false),
            ReleaseTag::new("v0.28.0", false),
            ReleaseTag::new("v0.27.1", false),
            ReleaseTag::new("v0.27.0", false),
        ];
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_tags()
            .withf(|repository| repository == "anz-bank/sysl")
            .returning(move |_| Ok(tags.clone()));
        source
    }

    fn no_toolchain() -> MockToolchain {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_bin_dir().returning(|| None);
        toolchain
    }

    #[tokio::test]
    async fn install_downloads_extracts_and_publishes_resolved_version() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/anz-bank/sysl/releases/download/v0.27.1/sysl_0.27.1_Linux-64bit.tar.gz",
            )
            .with_status(200)
            .with_body(fixtures::tar_gz(&[("sysl", b"sysl 0.27.1")]))
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "linux");

        let path = fixture
            .installer(sysl_source(), no_toolchain())
            .install("0.27.x")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(path, fixture.tool_dir("0.27.1"));
        assert_eq!(std::fs::read(path.join("sysl")).unwrap(), b"sysl 0.27.1");
        assert_eq!(fixture.search_path.dirs(), vec![path]);
    }

    #[tokio::test]
    async fn install_uses_zip_archive_on_windows() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/anz-bank/sysl/releases/download/v1.1.0/sysl_1.1.0_Windows-64bit.zip",
            )
            .with_status(200)
            .with_body(fixtures::zip(&[("sysl.exe", b"sysl 1.1.0")]))
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "win32");

        let path = fixture
            .installer(sysl_source(), no_toolchain())
            .install("1.1.x")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(path, fixture.tool_dir("1.1.0"));
        assert!(path.join("sysl.exe").is_file());
    }

    #[tokio::test]
    async fn install_reuses_cached_version_without_downloading() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "linux");
        let prebuilt = TempDir::new().unwrap();
        std::fs::write(prebuilt.path().join("sysl"), b"cached").unwrap();
        ToolCache::new(&fixture.config.tool_cache_dir)
            .cache_dir(prebuilt.path(), "sysl", "1.0.0", "x64")
            .unwrap();

        let path = fixture
            .installer(sysl_source(), no_toolchain())
            .install("1.x")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(path, fixture.tool_dir("1.0.0"));
        assert_eq!(std::fs::read(path.join("sysl")).unwrap(), b"cached");
        assert_eq!(fixture.search_path.dirs(), vec![path]);
    }

    #[tokio::test]
    async fn install_fails_with_no_match_before_downloading() {
        let server = Server::new_async().await;
        let fixture = Fixture::new(&server, "linux");
        let mut toolchain = MockToolchain::new();
        toolchain.expect_bin_dir().never();

        let result = fixture
            .installer(sysl_source(), toolchain)
            .install("2.x")
            .await;

        assert!(matches!(
            result,
            Err(InstallError::Resolution(ResolveError::NoMatch { .. }))
        ));
        assert!(fixture.search_path.dirs().is_empty());
    }

    #[tokio::test]
    async fn install_propagates_release_source_failure_as_resolution_error() {
        let server = Server::new_async().await;
        let fixture = Fixture::new(&server, "linux");
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_tags()
            .returning(|repository| Err(RegistryError::NotFound(repository.to_string())));

        let result = fixture
            .installer(source, no_toolchain())
            .install("1.x")
            .await;

        assert!(matches!(
            result,
            Err(InstallError::Resolution(ResolveError::Registry(
                RegistryError::NotFound(_)
            )))
        ));
    }

    #[tokio::test]
    async fn install_wraps_failed_download_and_leaves_cache_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/anz-bank/sysl/releases/download/v1.0.0/sysl_1.0.0_Linux-64bit.tar.gz",
            )
            .with_status(404)
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "linux");

        let result = fixture
            .installer(sysl_source(), no_toolchain())
            .install("1.0")
            .await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(InstallError::Download {
                ref version,
                source: DownloadError::Status { .. },
            }) if version == "1.0.0"
        ));
        assert_eq!(
            ToolCache::new(&fixture.config.tool_cache_dir).find("sysl", "1.0.0", "x64"),
            None
        );
        assert!(fixture.search_path.dirs().is_empty());
    }

    #[tokio::test]
    async fn install_wraps_corrupt_archive_and_cleans_staging() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock(
                "GET",
                "/anz-bank/sysl/releases/download/v1.0.0/sysl_1.0.0_Linux-64bit.tar.gz",
            )
            .with_status(200)
            .with_body("this is not a tarball")
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "linux");

        let result = fixture
            .installer(sysl_source(), no_toolchain())
            .install("1.x")
            .await;

        assert!(matches!(
            result,
            Err(InstallError::Download {
                source: DownloadError::Io(_),
                ..
            })
        ));
        assert_eq!(
            ToolCache::new(&fixture.config.tool_cache_dir).find("sysl", "1.0.0", "x64"),
            None
        );
        assert_eq!(
            std::fs::read_dir(&fixture.config.temp_dir).unwrap().count(),
            0
        );
    }

    #[tokio::test]
    async fn install_publishes_toolchain_bin_after_tool_dir() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock(
                "GET",
                "/anz-bank/sysl/releases/download/v0.28.0/sysl_0.28.0_Linux-64bit.tar.gz",
            )
            .with_status(200)
            .with_body(fixtures::tar_gz(&[("sysl", b"sysl")]))
            .create_async()
            .await;
        let fixture = Fixture::new(&server, "linux");
        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_bin_dir()
            .times(1)
            .returning(|| Some(PathBuf::from("/home/runner/go/bin")));

        let path = fixture
            .installer(sysl_source(), toolchain)
            .install("v0.28")
            .await
            .unwrap();

        assert_eq!(
            fixture.search_path.dirs(),
            vec![path, PathBuf::from("/home/runner/go/bin")]
        );
    }
}
