use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::config::USER_AGENT;
use crate::install::error::DownloadError;

/// Fallback file name when the URL has no usable last segment
const DEFAULT_FILE_NAME: &str = "download";

pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Downloads `url` into `dest_dir`, keeping the file name from the URL
    pub async fn download_tool(&self, url: &str, dest_dir: &Path) -> Result<PathBuf, DownloadError> {
        info!("Downloading {}", url);

        let mut response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/octet-stream")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                status,
                url: url.to_string(),
            });
        }

        let dest = dest_dir.join(file_name_from_url(url));
        debug!("Writing archive to {:?}", dest);

        let mut file = tokio::fs::File::create(&dest).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(dest)
    }
}

fn file_name_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_FILE_NAME,
    }
}
