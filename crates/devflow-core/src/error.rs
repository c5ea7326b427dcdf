//! Error types for route registration and configuration loading.
//!
//! - [`RouteError`] - a single route rejected at registration
//! - [`ConfigError`] - a route configuration that cannot be turned into a table

use thiserror::Error;

/// A route that cannot be registered.
///
/// Every variant is a boot-time configuration error: a table that produced
/// one of these must not be used to serve navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Another route already uses this name.
    #[error("route name '{0}' is already registered")]
    DuplicateName(String),

    /// The path matches the same locations as an existing route.
    #[error("route path '{path}' collides with '{existing}'")]
    DuplicatePath { path: String, existing: String },

    /// The route has an empty (or whitespace-only) name.
    #[error("route for path '{0}' has an empty name")]
    EmptyName(String),

    /// The path does not start with `/`.
    #[error("route path '{0}' must start with '/'")]
    RelativePath(String),

    /// The path contains a query string or fragment.
    #[error("route path '{0}' must not contain '?' or '#'")]
    QueryInPath(String),

    /// The path contains a parameter or wildcard segment.
    #[error("route path '{0}' contains a dynamic segment; only literal paths are supported")]
    DynamicSegment(String),
}

/// Errors raised while loading a route configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML or does not fit the schema.
    #[error("failed to parse route configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more routes were rejected. All rejections are reported.
    #[error("invalid route configuration: {}", join_errors(.0))]
    Invalid(Vec<RouteError>),
}

fn join_errors(errors: &[RouteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
