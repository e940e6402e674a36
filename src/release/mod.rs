//! Release discovery and selection
//!
//! # Modules
//!
//! - [`source`]: Trait for fetching release tags
//! - [`github`]: GitHub Releases API implementation
//! - [`resolver`]: Selects the release a version spec refers to
//! - [`semver`]: Version and spec normalization, precedence ordering
//! - [`types`]: `ReleaseTag` and `Release`
//! - [`url`]: Download URL of the platform archive
//! - [`error`]: Error types for fetching and resolving

pub mod error;
pub mod github;
pub mod resolver;
pub mod semver;
pub mod source;
pub mod types;
pub mod url;
