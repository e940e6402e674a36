use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::install::error::DownloadError;

/// Unpacks a gzip-compressed tarball into `dest`
pub fn extract_tar(archive: &Path, dest: &Path) -> Result<(), DownloadError> {
    debug!("Extracting {:?} to {:?}", archive, dest);
    std::fs::create_dir_all(dest)?;
    let file = File::open(archive)?;
    let decoder = flate2::read::GzDecoder::new(file);
    let mut tar = tar::Archive::new(decoder);
    tar.unpack(dest)?;
    Ok(())
}

/// Unpacks a zip archive into `dest`
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), DownloadError> {
    debug!("Extracting {:?} to {:?}", archive, dest);
    std::fs::create_dir_all(dest)?;
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(dest)?;
    Ok(())
}
