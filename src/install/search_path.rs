//! Publishing directories on the job search path

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Destination for directories that later steps should find binaries in
pub trait SearchPath: Send + Sync {
    fn add_path(&self, dir: &Path) -> io::Result<()>;
}

/// Runner search path backed by the `$GITHUB_PATH` file.
/// The runner prepends every line of that file to `PATH` for later steps.
pub struct RunnerPath {
    github_path: Option<PathBuf>,
}

impl RunnerPath {
    pub fn new(github_path: Option<PathBuf>) -> Self {
        Self { github_path }
    }

    /// Uses `$GITHUB_PATH` when set
    pub fn from_env() -> Self {
        Self::from_env_with(std::env::var_os("GITHUB_PATH"))
    }

    fn from_env_with(github_path: Option<OsString>) -> Self {
        Self::new(github_path.filter(|p| !p.is_empty()).map(PathBuf::from))
    }
}

impl SearchPath for RunnerPath {
    fn add_path(&self, dir: &Path) -> io::Result<()> {
        let Some(github_path) = &self.github_path else {
            debug!("GITHUB_PATH not set, skipping {}", dir.display());
            return Ok(());
        };

        debug!("add path: {}", dir.display());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(github_path)?;
        writeln!(file, "{}", dir.display())
    }
}
