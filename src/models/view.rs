//! View identifiers referenced by the route table.

use serde::Deserialize;

/// The renderable pages of the app.
///
/// Routes refer to views by these kebab-case identifiers in
/// `config/routes.toml` (`view = "json-cleaner"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Home,
    CursorFlow,
    JsonCleaner,
    Mirror,
    LineRemover,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        Self::Home,
        Self::CursorFlow,
        Self::JsonCleaner,
        Self::Mirror,
        Self::LineRemover,
    ];

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::CursorFlow => "Cursor Flow",
            Self::JsonCleaner => "JSON Cleaner",
            Self::Mirror => "Mirror",
            Self::LineRemover => "Line Remover",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Home => "All tools at a glance.",
            Self::CursorFlow => "Visualize pointer movement across the page.",
            Self::JsonCleaner => "Tidy up and reformat pasted JSON.",
            Self::Mirror => "Mirror text and input back at you.",
            Self::LineRemover => "Strip unwanted lines from a block of text.",
        }
    }
}
