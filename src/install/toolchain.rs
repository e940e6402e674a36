//! Auxiliary toolchain whose binary directory is published alongside the tool
//!
//! The Go setup action does not put `$GOPATH/bin` on the path, so binaries
//! installed with `go install` after sysl would not be found otherwise.

#[cfg(test)]
use mockall::automock;

use std::path::PathBuf;

use tokio::process::Command;
use tracing::debug;

/// Probe for an optional toolchain's workspace binary directory
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Toolchain: Send + Sync {
    /// Returns the directory to publish, or None when the toolchain is absent
    async fn bin_dir(&self) -> Option<PathBuf>;
}

/// Go toolchain, publishing `$(go env GOPATH)/bin`
pub struct GoToolchain {
    binary: String,
}

impl GoToolchain {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new("go")
    }
}

#[async_trait::async_trait]
impl Toolchain for GoToolchain {
    async fn bin_dir(&self) -> Option<PathBuf> {
        let Ok(go) = which::which(&self.binary) else {
            debug!("{} not found on PATH", self.binary);
            return None;
        };

        let output = match Command::new(&go).args(["env", "GOPATH"]).output().await {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run {:?}: {}", go, e);
                return None;
            }
        };
        if !output.status.success() {
            debug!("{:?} env GOPATH exited with {}", go, output.status);
            return None;
        }

        let go_path = gopath_from_stdout(&output.stdout)?;
        debug!("GOPATH: {}", go_path.display());
        Some(go_path.join("bin"))
    }
}

fn gopath_from_stdout(stdout: &[u8]) -> Option<PathBuf> {
    let go_path = String::from_utf8_lossy(stdout).trim().to_string();
    if go_path.is_empty() {
        None
    } else {
        Some(PathBuf::from(go_path))
    }
}
