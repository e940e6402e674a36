use std::cmp::Ordering;

use semver::Version;

/// Strip a leading `v` and pad partial versions with zeros.
///
/// Examples:
/// - "v1" -> "1.0.0"
/// - "1.2" -> "1.2.0"
/// - "1.2.3" -> "1.2.3"
pub fn normalize_version(version: &str) -> String {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    match parts.len() {
        1 => format!("{}.0.0", version),
        2 => format!("{}.0", version),
        _ => version.to_string(),
    }
}

/// Strip a leading `v` and a trailing `.x` from a version spec.
///
/// The result is used as a literal prefix, so "1.2.x" becomes "1.2".
pub fn normalize_spec(spec: &str) -> String {
    let spec = spec.strip_prefix('v').unwrap_or(spec);
    spec.strip_suffix(".x").unwrap_or(spec).to_string()
}

/// Compare two normalized versions by descending semver precedence.
///
/// Versions that fail to parse sort after valid ones and compare equal to
/// each other, so a stable sort keeps their original order.
pub fn rcompare(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}
