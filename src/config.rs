//! Application configuration.
//!
//! The route table is a text asset loaded at compile time using
//! `include_str!` and parsed once at boot.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navigation bar and the document title.
pub const APP_NAME: &str = "devflow-kit";

/// One-line description shown on the home page.
pub const APP_TAGLINE: &str = "Small browser tools for everyday development chores.";

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// Routing
// =============================================================================

/// Route table and history mode (see `config/routes.toml`).
pub const ROUTES_TOML: &str = include_str!("../config/routes.toml");

/// Document title for a page.
pub fn page_title(page: &str) -> String {
    format!("{} · {}", page, APP_NAME)
}
