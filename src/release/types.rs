use serde::Deserialize;

use crate::release::semver::normalize_version;

/// Entry of the GitHub Releases API response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseTag {
    #[serde(rename = "tag_name")]
    pub name: String,
    #[serde(rename = "prerelease", default)]
    pub is_prerelease: bool,
}

impl ReleaseTag {
    pub fn new(name: &str, is_prerelease: bool) -> Self {
        Self {
            name: name.to_string(),
            is_prerelease,
        }
    }
}

/// A release with a normalized three-component version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: String,
    pub is_prerelease: bool,
}

impl Release {
    pub fn from_tag(tag: &ReleaseTag) -> Self {
        Self {
            version: normalize_version(&tag.name),
            is_prerelease: tag.is_prerelease,
        }
    }
}
