//! Client-side route table for the devflow-kit single-page app.
//!
//! Target-independent: nothing here touches the DOM. The browser address bar
//! is plugged in through [`AddressBar`]; [`MemoryHistory`] stands in for it in
//! tests and native tools.
//!
//! - [`Route`], [`ActiveRoute`] - route records and the resolved state
//! - [`RouteTable`] - registration and resolution
//! - [`HistoryMode`], [`Address`] - hash vs browser address formats
//! - [`Router`] - table + mode + address bar
//! - [`RoutesConfig`], [`load`] - TOML configuration

pub mod config;
pub mod error;
pub mod history;
mod memory;
pub mod path;
mod route;
mod router;
mod table;

pub use config::{load, load_router, HistoryConfig, RoutesConfig};
pub use error::{ConfigError, RouteError};
pub use history::{Address, HistoryMode, ModeKind};
pub use memory::MemoryHistory;
pub use path::MatchOptions;
pub use route::{ActiveRoute, Route};
pub use router::{AddressBar, Router};
pub use table::RouteTable;
