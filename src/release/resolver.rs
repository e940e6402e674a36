//! Picks the release a version spec refers to
//!
//! Matching is a literal string prefix test on the normalized version, so
//! "1.1" matches both "1.1.0" and "1.10.0". Prereleases are never excluded,
//! only ordered after every stable release.

use tracing::debug;

use crate::release::error::ResolveError;
use crate::release::semver::{normalize_spec, rcompare};
use crate::release::types::{Release, ReleaseTag};

/// Resolve `spec` against `tags`, returning the best matching release
///
/// # Arguments
/// * `spec` - Full ("1.2.0"), partial ("1.2") or x-trailing ("1.2.x") version, optionally `v`-prefixed
/// * `tags` - Release tags as published
pub fn resolve(spec: &str, tags: &[ReleaseTag]) -> Result<Release, ResolveError> {
    let prefix = normalize_spec(spec);

    let mut releases: Vec<Release> = tags.iter().map(Release::from_tag).collect();
    releases.sort_by(|a, b| {
        a.is_prerelease
            .cmp(&b.is_prerelease)
            .then_with(|| rcompare(&a.version, &b.version))
    });
    releases.retain(|r| r.version.starts_with(&prefix));

    debug!("evaluating {} versions", releases.len());

    let release = releases
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::NoMatch {
            spec: spec.to_string(),
        })?;

    debug!("matched: {}", release.version);
    Ok(release)
}
