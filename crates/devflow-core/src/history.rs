//! History modes: how a logical route path is written to and read from the
//! browser address bar.
//!
//! | mode | visible address for `/cursor-flow` (base `/dev-flow-kit/`) |
//! |------|-------------------------------------------------------------|
//! | hash | `/dev-flow-kit/#/cursor-flow` |
//! | browser | `/dev-flow-kit/cursor-flow` |
//!
//! Hash mode with the root base leaves the document path alone: an app
//! served from `/dev-flow-kit/` with base `/` still shows
//! `/dev-flow-kit/#/cursor-flow`.
//!
//! Hash mode needs no server cooperation since the fragment never leaves the
//! browser. Browser mode needs the static host to serve the entry page for
//! every path under the base prefix.

use serde::{Deserialize, Serialize};

use crate::path::{normalize, strip_query};

/// Snapshot of the parts of `window.location` the router reads.
///
/// Field formats follow the DOM: `search` keeps its leading `?` and `hash`
/// keeps its leading `#`; both are empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Address {
    /// Split a same-origin URL such as `/base/?q=1#/mirror` into its parts.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(idx) => (&url[..idx], &url[idx..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Reassemble the same-origin URL.
    pub fn to_url(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Which address-bar strategy is in use, as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Hash,
    Browser,
}

/// The active history mode together with its base prefix.
///
/// The base is stored without a trailing slash (`""` for the site root), so
/// joining it with a route path never doubles a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Route path lives in the fragment: `<base>/#/<route-path>`.
    Hash { base: String },
    /// Route path is the real URL path: `<base>/<route-path>`.
    Browser { base: String },
}

impl HistoryMode {
    pub fn hash(base: &str) -> Self {
        Self::Hash {
            base: normalize_base(base),
        }
    }

    pub fn browser(base: &str) -> Self {
        Self::Browser {
            base: normalize_base(base),
        }
    }

    pub fn new(kind: ModeKind, base: &str) -> Self {
        match kind {
            ModeKind::Hash => Self::hash(base),
            ModeKind::Browser => Self::browser(base),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Hash { .. } => ModeKind::Hash,
            Self::Browser { .. } => ModeKind::Browser,
        }
    }

    /// Base prefix without trailing slash.
    pub fn base(&self) -> &str {
        match self {
            Self::Hash { base } | Self::Browser { base } => base,
        }
    }

    /// DOM event fired when the user moves through history in this mode.
    pub fn change_event(&self) -> &'static str {
        match self {
            Self::Hash { .. } => "hashchange",
            Self::Browser { .. } => "popstate",
        }
    }

    /// Link target for a logical route path.
    ///
    /// Hash mode without a base gives a fragment-only reference (`#/mirror`),
    /// which keeps whatever document path the app was loaded from.
    pub fn href(&self, path: &str) -> String {
        let path = normalize(path);
        match self {
            Self::Hash { base } if base.is_empty() => format!("#{}", path),
            Self::Hash { base } => format!("{}/#{}", base, path),
            Self::Browser { base } => format!("{}{}", base, path),
        }
    }

    /// Full same-origin address that shows `path` when leaving `current`.
    ///
    /// Differs from [`href`](Self::href) only for hash mode without a base,
    /// where the current pathname and query are kept and only the fragment
    /// changes.
    pub fn href_at(&self, path: &str, current: &Address) -> String {
        match self {
            Self::Hash { base } if base.is_empty() => format!(
                "{}{}#{}",
                current.pathname,
                current.search,
                normalize(path)
            ),
            _ => self.href(path),
        }
    }

    /// Logical route path currently shown by `address`.
    ///
    /// In browser mode a pathname outside the base prefix is returned
    /// unchanged; it will normally resolve to nothing.
    pub fn current_path(&self, address: &Address) -> String {
        match self {
            Self::Hash { .. } => {
                let fragment = address
                    .hash
                    .strip_prefix('#')
                    .unwrap_or(address.hash.as_str());
                normalize(strip_query(fragment))
            }
            Self::Browser { base } => {
                let pathname = address.pathname.as_str();
                match pathname.strip_prefix(base.as_str()) {
                    Some(rest) if rest.is_empty() || rest.starts_with('/') => normalize(rest),
                    _ => normalize(pathname),
                }
            }
        }
    }
}

/// `"/dev-flow-kit/"`, `"dev-flow-kit"` and `"/dev-flow-kit"` all become
/// `"/dev-flow-kit"`; `""` and `"/"` become `""`.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("/dev-flow-kit/"), "/dev-flow-kit");
        assert_eq!(normalize_base("dev-flow-kit"), "/dev-flow-kit");
    }

    #[test]
    fn test_address_parse() {
        let addr = Address::parse("/dev-flow-kit/?ref=x#/mirror");
        assert_eq!(addr.pathname, "/dev-flow-kit/");
        assert_eq!(addr.search, "?ref=x");
        assert_eq!(addr.hash, "#/mirror");
        assert_eq!(addr.to_url(), "/dev-flow-kit/?ref=x#/mirror");

        let empty = Address::parse("");
        assert_eq!(empty.pathname, "/");
        assert!(empty.search.is_empty());
        assert!(empty.hash.is_empty());
    }

    #[test]
    fn test_hash_href() {
        let root = HistoryMode::hash("/");
        assert_eq!(root.href("/json-cleaner"), "#/json-cleaner");
        assert_eq!(root.href("/"), "#/");

        let nested = HistoryMode::hash("/dev-flow-kit/");
        assert_eq!(nested.href("cursor-flow"), "/dev-flow-kit/#/cursor-flow");
    }

    #[test]
    fn test_hash_href_at_keeps_document_path() {
        let root = HistoryMode::hash("");
        let current = Address::parse("/dev-flow-kit/?ref=x#/");
        assert_eq!(root.href_at("/mirror", &current), "/dev-flow-kit/?ref=x#/mirror");
        assert_eq!(root.href_at("/", &Address::parse("/")), "/#/");

        // A configured base still wins over the current pathname
        let nested = HistoryMode::hash("/dev-flow-kit");
        assert_eq!(
            nested.href_at("/mirror", &Address::parse("/elsewhere/")),
            "/dev-flow-kit/#/mirror"
        );
        let browser = HistoryMode::browser("/dev-flow-kit/");
        assert_eq!(
            browser.href_at("/mirror", &current),
            "/dev-flow-kit/mirror"
        );
    }

    #[test]
    fn test_browser_href() {
        let mode = HistoryMode::browser("/dev-flow-kit/");
        assert_eq!(mode.href("/cursor-flow"), "/dev-flow-kit/cursor-flow");
        assert_eq!(mode.href("/"), "/dev-flow-kit/");

        let root = HistoryMode::browser("");
        assert_eq!(root.href("/mirror"), "/mirror");
        assert_eq!(root.href("/"), "/");
    }

    #[test]
    fn test_hash_current_path() {
        let mode = HistoryMode::hash("/");
        assert_eq!(mode.current_path(&Address::parse("/")), "/");
        assert_eq!(mode.current_path(&Address::parse("/#")), "/");
        assert_eq!(mode.current_path(&Address::parse("/#/mirror")), "/mirror");
        assert_eq!(
            mode.current_path(&Address::parse("/#/json-cleaner?sample=1")),
            "/json-cleaner"
        );
    }

    #[test]
    fn test_browser_current_path() {
        let mode = HistoryMode::browser("/dev-flow-kit/");
        assert_eq!(
            mode.current_path(&Address::parse("/dev-flow-kit/cursor-flow?x=1")),
            "/cursor-flow"
        );
        assert_eq!(mode.current_path(&Address::parse("/dev-flow-kit")), "/");
        assert_eq!(mode.current_path(&Address::parse("/dev-flow-kit/")), "/");
        // Outside the base prefix: left as is
        assert_eq!(
            mode.current_path(&Address::parse("/dev-flow-kitchen")),
            "/dev-flow-kitchen"
        );
        assert_eq!(mode.current_path(&Address::parse("/other")), "/other");
    }

    #[test]
    fn test_change_event() {
        assert_eq!(HistoryMode::hash("").change_event(), "hashchange");
        assert_eq!(HistoryMode::browser("").change_event(), "popstate");
    }
}
