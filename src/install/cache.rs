//! Local tool cache keyed by name, version and architecture
//!
//! Layout: `<root>/<name>/<version>/<arch>/` with a sibling
//! `<arch>.complete` marker written once the directory is fully populated.
//! There is no locking; concurrent writers of the same key overwrite each other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

pub struct ToolCache {
    root: PathBuf,
}

impl ToolCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a tool version is (or would be) cached in
    pub fn tool_path(&self, name: &str, version: &str, arch: &str) -> PathBuf {
        self.root.join(name).join(version).join(arch)
    }

    fn marker_path(&self, name: &str, version: &str, arch: &str) -> PathBuf {
        self.root.join(name).join(version).join(format!("{}.complete", arch))
    }

    /// Returns the cached directory if a complete entry exists
    pub fn find(&self, name: &str, version: &str, arch: &str) -> Option<PathBuf> {
        let path = self.tool_path(name, version, arch);
        if path.is_dir() && self.marker_path(name, version, arch).is_file() {
            debug!("Found {} {} in tool cache at {:?}", name, version, path);
            Some(path)
        } else {
            debug!("{} {} not found in tool cache", name, version);
            None
        }
    }

    /// Copies `source` into the cache and marks the entry complete
    pub fn cache_dir(
        &self,
        source: &Path,
        name: &str,
        version: &str,
        arch: &str,
    ) -> io::Result<PathBuf> {
        let dest = self.tool_path(name, version, arch);
        let marker = self.marker_path(name, version, arch);
        debug!("Caching {:?} into {:?}", source, dest);

        if marker.exists() {
            fs::remove_file(&marker)?;
        }
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        fs::create_dir_all(&dest)?;
        copy_dir_all(source, &dest)?;

        fs::write(&marker, b"")?;
        Ok(dest)
    }
}

fn copy_dir_all(source: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            copy_symlink(&entry.path(), &target)?;
        } else if file_type.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Recreates the link itself; the target may be relative or dangling
#[cfg(unix)]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let link = fs::read_link(source)?;
    std::os::unix::fs::symlink(link, dest)
}

#[cfg(windows)]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let link = fs::read_link(source)?;
    if fs::metadata(source).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link, dest)
    } else {
        std::os::windows::fs::symlink_file(link, dest)
    }
}
