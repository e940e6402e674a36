use thiserror::Error;

use crate::release::error::ResolveError;

/// Failure while fetching, extracting or caching a release archive
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} downloading {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error(transparent)]
    Resolution(#[from] ResolveError),

    #[error("Failed to download version {version}")]
    Download {
        version: String,
        #[source]
        source: DownloadError,
    },

    #[error("Failed to add directory to the search path: {0}")]
    SearchPath(#[source] std::io::Error),
}
