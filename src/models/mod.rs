//! Data models and types for the application.
//!
//! - [`ViewId`] - pages the route table can point at

mod view;

pub use view::ViewId;
