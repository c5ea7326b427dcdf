//! Route records and the active-route state.

use serde::{Deserialize, Serialize};

/// A registered `(path, name, view)` triple.
///
/// `V` is whatever the rendering layer uses to pick a view; the route table
/// never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Literal path pattern, e.g. `/json-cleaner`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unique symbolic name, e.g. `json-cleaner`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Result of resolving a path: the matched route, or the path that matched
/// nothing.
///
/// `Unmatched` is a normal outcome. The rendering layer is expected to show a
/// not-found view for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveRoute<V> {
    Matched(Route<V>),
    Unmatched {
        /// Normalized path that was requested.
        path: String,
    },
}

impl<V> ActiveRoute<V> {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn route(&self) -> Option<&Route<V>> {
        match self {
            Self::Matched(route) => Some(route),
            Self::Unmatched { .. } => None,
        }
    }

    /// Name of the matched route, if any.
    pub fn name(&self) -> Option<&str> {
        self.route().map(Route::name)
    }

    /// Path this state was resolved from (the route pattern when matched).
    pub fn path(&self) -> &str {
        match self {
            Self::Matched(route) => route.path(),
            Self::Unmatched { path } => path,
        }
    }
}
