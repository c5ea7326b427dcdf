//! Route configuration loaded from TOML.
//!
//! ```toml
//! [history]
//! mode = "browser"
//! base = "/dev-flow-kit/"
//!
//! [[routes]]
//! path = "/"
//! name = "home"
//! view = "home"
//! ```
//!
//! Parsing checks the shape; [`RoutesConfig::build`] then registers every
//! route and fails with all rejected routes at once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::{HistoryMode, ModeKind};
use crate::path::MatchOptions;
use crate::route::Route;
use crate::router::{AddressBar, Router};
use crate::table::RouteTable;

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    pub mode: ModeKind,
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_base() -> String {
    "/".to_string()
}

impl HistoryConfig {
    pub fn to_mode(&self) -> HistoryMode {
        HistoryMode::new(self.mode, &self.base)
    }
}

/// A whole route configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig<V> {
    pub history: HistoryConfig,
    #[serde(default)]
    pub matching: MatchOptions,
    #[serde(default = "Vec::new")]
    pub routes: Vec<Route<V>>,
}

impl<V: DeserializeOwned> RoutesConfig<V> {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

impl<V> RoutesConfig<V> {
    /// Register every route, yielding the table and history mode.
    pub fn build(self) -> Result<(RouteTable<V>, HistoryMode), ConfigError> {
        let mode = self.history.to_mode();
        let table = RouteTable::from_routes(self.matching, self.routes).map_err(|errors| {
            tracing::warn!(count = errors.len(), "route configuration rejected");
            ConfigError::Invalid(errors)
        })?;
        Ok((table, mode))
    }
}

/// Parse and build a route configuration.
pub fn load<V: DeserializeOwned>(source: &str) -> Result<(RouteTable<V>, HistoryMode), ConfigError> {
    RoutesConfig::from_toml(source)?.build()
}

/// Parse a configuration and bind it to an address bar.
pub fn load_router<V, A>(source: &str, bar: A) -> Result<Router<V, A>, ConfigError>
where
    V: DeserializeOwned + Clone,
    A: AddressBar,
{
    let (table, mode) = load(source)?;
    Ok(Router::new(table, mode, bar))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSER: &str = r#"
        [history]
        mode = "browser"
        base = "/dev-flow-kit/"

        [[routes]]
        path = "/"
        name = "home"
        view = "home"

        [[routes]]
        path = "/cursor-flow"
        name = "cursor-flow"
        view = "cursor-flow"

        [[routes]]
        path = "/json-cleaner"
        name = "json-cleaner"
        view = "json-cleaner"
    "#;

    #[test]
    fn test_load_browser_config() {
        let (table, mode) = load::<String>(BROWSER).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(mode, HistoryMode::browser("/dev-flow-kit"));
        assert_eq!(table.options(), MatchOptions::default());
        assert_eq!(
            table.find("/cursor-flow").map(|r| r.view().as_str()),
            Some("cursor-flow")
        );
    }

    #[test]
    fn test_default_base_and_matching() {
        let config: RoutesConfig<String> = RoutesConfig::from_toml(
            r#"
            [history]
            mode = "hash"

            [matching]
            strict = false
            "#,
        )
        .unwrap();
        assert_eq!(config.history.base, "/");
        assert!(!config.matching.strict);
        assert!(config.matching.sensitive);
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_matching_defaults_to_exact() {
        let source = r#"
            [history]
            mode = "hash"

            [[routes]]
            path = "/mirror"
            name = "mirror"
            view = "mirror"
        "#;
        let (table, _) = load::<String>(source).unwrap();
        assert_eq!(table.options(), MatchOptions::EXACT);
        assert!(table.find("/mirror").is_some());
        assert!(table.find("/Mirror").is_none());
        assert!(table.find("/mirror/").is_none());

        let lenient = format!("[matching]\nstrict = false\nsensitive = false\n{}", source);
        let (table, _) = load::<String>(&lenient).unwrap();
        assert_eq!(table.find("/Mirror/").map(|r| r.name()), Some("mirror"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = RoutesConfig::<String>::from_toml(
            r#"
            [history]
            mode = "memory"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_route_field_rejected() {
        let err = RoutesConfig::<String>::from_toml(
            r#"
            [history]
            mode = "hash"

            [[routes]]
            path = "/"
            name = "home"
            view = "home"
            component = "Home"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_all_invalid_routes_reported() {
        let err = load::<String>(
            r#"
            [history]
            mode = "hash"

            [[routes]]
            path = "/"
            name = "home"
            view = "home"

            [[routes]]
            path = "/"
            name = "landing"
            view = "home"

            [[routes]]
            path = "/mirror"
            name = "home"
            view = "mirror"
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
}
