//! Trait for fetching the published release list

#[cfg(test)]
use mockall::automock;

use crate::release::error::RegistryError;
use crate::release::types::ReleaseTag;

/// Source of release tags for a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every release tag published for `repository`
    ///
    /// # Arguments
    /// * `repository` - `owner/project`, e.g. "anz-bank/sysl"
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseTag>)` - Tags in the order the source returns them
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<ReleaseTag>, RegistryError>;
}
