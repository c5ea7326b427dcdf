//! Router: a route table bound to a history mode and an address bar.
//!
//! The [`Router`] owns the Active Route. It changes only through
//! [`Router::navigate`], [`Router::replace`] and [`Router::sync`]; everything
//! else is a read.

use crate::history::{Address, HistoryMode};
use crate::path::normalize;
use crate::route::{ActiveRoute, Route};
use crate::table::RouteTable;

/// Host-side storage for the current address.
///
/// Implemented over `window.history` in the browser and by
/// [`MemoryHistory`](crate::MemoryHistory) everywhere else.
pub trait AddressBar {
    /// Current same-origin location.
    fn address(&self) -> Address;

    /// Add a new history entry showing `url`.
    fn push(&mut self, url: &str);

    /// Overwrite the current history entry with `url`.
    fn replace(&mut self, url: &str);

    /// Move `delta` entries through history.
    ///
    /// Browsers complete the move asynchronously and report it with an event;
    /// call [`Router::sync`] once it has happened.
    fn go(&mut self, delta: isize);
}

/// Route table, history mode and address bar tied together.
#[derive(Debug, Clone)]
pub struct Router<V, A> {
    table: RouteTable<V>,
    mode: HistoryMode,
    bar: A,
    active: ActiveRoute<V>,
}

impl<V: Clone, A: AddressBar> Router<V, A> {
    /// Create a router; the initial Active Route is whatever the address bar
    /// currently shows.
    pub fn new(table: RouteTable<V>, mode: HistoryMode, bar: A) -> Self {
        let active = table.resolve(&mode.current_path(&bar.address()));
        Self {
            table,
            mode,
            bar,
            active,
        }
    }

    /// Logical path shown in the address bar, with the base prefix or `#`
    /// removed.
    pub fn current_path(&self) -> String {
        self.mode.current_path(&self.bar.address())
    }

    /// Link target for a logical path. See [`HistoryMode::href`].
    pub fn href(&self, path: &str) -> String {
        self.mode.href(path)
    }

    /// Link target for the route registered as `name`.
    pub fn href_for_name(&self, name: &str) -> Option<String> {
        self.table.by_name(name).map(|route| self.mode.href(route.path()))
    }

    /// Show `path` in the address bar as a new history entry and make it the
    /// Active Route.
    ///
    /// Navigating to the address already shown adds no history entry.
    pub fn navigate(&mut self, path: &str) -> &ActiveRoute<V> {
        let current = self.bar.address();
        let href = self.mode.href_at(path, &current);
        if current.to_url() != href {
            self.bar.push(&href);
        }
        self.activate(path)
    }

    /// Like [`navigate`](Self::navigate) but overwrites the current history
    /// entry.
    pub fn replace(&mut self, path: &str) -> &ActiveRoute<V> {
        let href = self.mode.href_at(path, &self.bar.address());
        self.bar.replace(&href);
        self.activate(path)
    }

    /// Navigate to the route registered as `name`.
    pub fn navigate_named(&mut self, name: &str) -> Option<&ActiveRoute<V>> {
        let path = self.table.by_name(name)?.path().to_string();
        Some(self.navigate(&path))
    }

    /// Re-read the address bar after the host changed it (back/forward,
    /// manual edits) and update the Active Route.
    pub fn sync(&mut self) -> &ActiveRoute<V> {
        let path = self.current_path();
        self.activate(&path)
    }

    pub fn back(&mut self) {
        self.go(-1);
    }

    pub fn forward(&mut self) {
        self.go(1);
    }

    pub fn go(&mut self, delta: isize) {
        self.bar.go(delta);
    }

    /// Whether `path` resolves to the Active Route.
    pub fn is_active(&self, path: &str) -> bool {
        match (self.table.find(path), self.active.route()) {
            (Some(target), Some(active)) => target.name() == active.name(),
            _ => false,
        }
    }

    fn activate(&mut self, path: &str) -> &ActiveRoute<V> {
        self.active = self.table.resolve(path);
        tracing::debug!(
            path = %normalize(path),
            route = self.active.name().unwrap_or("<unmatched>"),
            "navigated"
        );
        &self.active
    }
}

impl<V, A> Router<V, A> {
    #[inline]
    pub fn active(&self) -> &ActiveRoute<V> {
        &self.active
    }

    #[inline]
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    #[inline]
    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    #[inline]
    pub fn address_bar(&self) -> &A {
        &self.bar
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.table.iter()
    }
}
