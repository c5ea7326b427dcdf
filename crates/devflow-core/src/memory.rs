//! In-memory address bar.

use crate::history::Address;
use crate::router::AddressBar;

/// History stack kept in memory, for tests and for running the router
/// outside a browser.
///
/// Entries after the cursor are dropped on `push`, and `go` clamps to the
/// ends of the stack, matching what a browser tab does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    /// Start with a single entry showing `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            position: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryHistory {
    fn address(&self) -> Address {
        Address::parse(&self.entries[self.position])
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.position + 1);
        self.entries.push(url.to_string());
        self.position = self.entries.len() - 1;
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.position] = url.to_string();
    }

    fn go(&mut self, delta: isize) {
        let last = self.entries.len() - 1;
        self.position = self.position.saturating_add_signed(delta).min(last);
    }
}
