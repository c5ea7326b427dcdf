//! Path normalization and match keys.
//!
//! A requested path is reduced to a *match key* before it is compared with
//! registered routes. The query string and fragment are always dropped. By
//! default the rest must match exactly; [`MatchOptions`] can relax trailing
//! slash and letter case.

use serde::{Deserialize, Serialize};

/// Options controlling how paths are compared.
///
/// The defaults are exact: `/Mirror` and `/mirror/` are not `/mirror`.
/// Clearing `strict` forgives a single trailing slash; clearing `sensitive`
/// ignores letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Treat `/mirror/` and `/mirror` as different paths.
    pub strict: bool,
    /// Treat `/Mirror` and `/mirror` as different paths.
    pub sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::EXACT
    }
}

impl MatchOptions {
    /// Exact string equality after query and fragment removal.
    pub const EXACT: Self = Self {
        strict: true,
        sensitive: true,
    };

    /// Ignore a single trailing slash and letter case.
    pub const LENIENT: Self = Self {
        strict: false,
        sensitive: false,
    };

    /// Reduce a path to the key used for route lookup.
    pub fn key(&self, path: &str) -> String {
        let mut key = normalize(path);
        if !self.strict && key.len() > 1 && key.ends_with('/') {
            key.pop();
        }
        if !self.sensitive {
            key = key.to_lowercase();
        }
        key
    }
}

/// Remove the query string and fragment from a path.
#[inline]
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Normalize a requested path to an absolute path without query or fragment.
///
/// An empty path is the root: `""` and `"?x=1"` both become `/`.
pub fn normalize(path: &str) -> String {
    let path = strip_query(path.trim());
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Whether a path segment is a parameter or wildcard pattern.
pub(crate) fn is_dynamic_segment(segment: &str) -> bool {
    segment.starts_with(':') || segment.contains(['*', '(', ')'])
}
