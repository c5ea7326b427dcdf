//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point) and navigation bar
//! - [`link`] - Address-bar-aware links
//! - [`pages`] - Page components, including the not-found page

pub mod link;
pub mod pages;
pub mod router;

pub use router::AppRouter;
