//! The route table: write-once registration, read-many resolution.

use std::collections::HashMap;

use crate::error::RouteError;
use crate::path::{is_dynamic_segment, MatchOptions};
use crate::route::{ActiveRoute, Route};

/// Registered routes indexed by name and by match key.
///
/// Resolution is a pure lookup. Two routes whose paths reduce to the same
/// match key are ambiguous and the second one is rejected, so a resolved path
/// always has exactly one owner.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    by_name: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
    options: MatchOptions,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::with_options(MatchOptions::default())
    }
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MatchOptions) -> Self {
        Self {
            routes: Vec::new(),
            by_name: HashMap::new(),
            by_key: HashMap::new(),
            options,
        }
    }

    /// Build a table from a list of routes, reporting every rejected route.
    pub fn from_routes(
        options: MatchOptions,
        routes: impl IntoIterator<Item = Route<V>>,
    ) -> Result<Self, Vec<RouteError>> {
        let mut table = Self::with_options(options);
        let errors: Vec<RouteError> = routes
            .into_iter()
            .filter_map(|route| table.register(route).err())
            .collect();

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(errors)
        }
    }

    /// Add a route. Fails without modifying the table if the route is
    /// malformed or clashes with an existing one.
    pub fn register(&mut self, route: Route<V>) -> Result<(), RouteError> {
        validate(&route)?;

        if self.by_name.contains_key(route.name()) {
            return Err(RouteError::DuplicateName(route.name().to_string()));
        }

        let key = self.options.key(route.path());
        if let Some(&idx) = self.by_key.get(&key) {
            return Err(RouteError::DuplicatePath {
                path: route.path().to_string(),
                existing: self.routes[idx].path().to_string(),
            });
        }

        tracing::debug!(name = route.name(), path = route.path(), "route registered");

        let idx = self.routes.len();
        self.by_name.insert(route.name().to_string(), idx);
        self.by_key.insert(key, idx);
        self.routes.push(route);
        Ok(())
    }

    /// Route owning `path`, if any.
    pub fn find(&self, path: &str) -> Option<&Route<V>> {
        self.by_key
            .get(&self.options.key(path))
            .map(|&idx| &self.routes[idx])
    }

    /// Route registered under `name`, if any.
    pub fn by_name(&self, name: &str) -> Option<&Route<V>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[inline]
    pub fn options(&self) -> MatchOptions {
        self.options
    }
}

impl<V: Clone> RouteTable<V> {
    /// Resolve a path to its route, or to `Unmatched`.
    pub fn resolve(&self, path: &str) -> ActiveRoute<V> {
        match self.find(path) {
            Some(route) => ActiveRoute::Matched(route.clone()),
            None => {
                let path = crate::path::normalize(path);
                tracing::debug!(%path, "no route matches path");
                ActiveRoute::Unmatched { path }
            }
        }
    }
}

fn validate<V>(route: &Route<V>) -> Result<(), RouteError> {
    let path = route.path();

    if route.name().trim().is_empty() {
        return Err(RouteError::EmptyName(path.to_string()));
    }
    if !path.starts_with('/') {
        return Err(RouteError::RelativePath(path.to_string()));
    }
    if path.contains(['?', '#']) {
        return Err(RouteError::QueryInPath(path.to_string()));
    }
    if path.split('/').any(is_dynamic_segment) {
        return Err(RouteError::DynamicSegment(path.to_string()));
    }
    Ok(())
}
