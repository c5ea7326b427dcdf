//! Browser API helpers.
//!
//! Provides:
//! - [`dom`] - window and document access
//! - [`BrowserHistory`] - the router's address bar over `window.history`

pub mod dom;
mod history;

pub use history::BrowserHistory;
