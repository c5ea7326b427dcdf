//! Command implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use devflow_core::{
    ActiveRoute, Address, HistoryMode, MemoryHistory, ModeKind, Route, RouteTable, Router,
};
use serde::Serialize;

/// Views are plain strings here; the CLI never renders them.
pub type Table = RouteTable<String>;

#[derive(Debug, Serialize)]
struct RouteRow<'a> {
    name: &'a str,
    path: &'a str,
    view: &'a str,
    href: String,
}

impl<'a> RouteRow<'a> {
    fn new(route: &'a Route<String>, mode: &HistoryMode) -> Self {
        Self {
            name: route.name(),
            path: route.path(),
            view: route.view(),
            href: mode.href(route.path()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Resolution<'a> {
    Matched(RouteRow<'a>),
    Unmatched { path: String },
}

pub fn load_config(path: &Path) -> Result<(Table, HistoryMode)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read route config {}", path.display()))?;
    let config = devflow_core::load::<String>(&source)
        .with_context(|| format!("Invalid route config {}", path.display()))?;
    tracing::debug!(path = %path.display(), routes = config.0.len(), "route config loaded");
    Ok(config)
}

pub fn list_routes(table: &Table, mode: &HistoryMode, json: bool) -> Result<String> {
    let rows: Vec<_> = table.iter().map(|route| RouteRow::new(route, mode)).collect();
    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let path_width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0);
    Ok(rows
        .iter()
        .map(|r| {
            format!(
                "{:name_width$}  {:path_width$}  {}",
                r.name,
                r.path,
                r.href,
                name_width = name_width,
                path_width = path_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn resolve(table: &Table, mode: &HistoryMode, path: &str, json: bool) -> Result<String> {
    let resolution = match table.find(path) {
        Some(route) => Resolution::Matched(RouteRow::new(route, mode)),
        None => Resolution::Unmatched {
            path: devflow_core::path::normalize(path),
        },
    };

    if json {
        return Ok(serde_json::to_string_pretty(&resolution)?);
    }
    Ok(match resolution {
        Resolution::Matched(row) => format!("{} -> {} ({})", row.path, row.name, row.href),
        Resolution::Unmatched { path } => format!("{} -> unmatched", path),
    })
}

pub fn href(table: &Table, mode: &HistoryMode, name: &str) -> Result<String> {
    let route = table
        .by_name(name)
        .with_context(|| format!("No route named '{}'", name))?;
    Ok(mode.href(route.path()))
}

pub fn check(table: &Table, mode: &HistoryMode) -> String {
    let kind = match mode.kind() {
        ModeKind::Hash => "hash",
        ModeKind::Browser => "browser",
    };
    let base = if mode.base().is_empty() { "/" } else { mode.base() };
    let mut summary = format!("ok: {} routes, {} history, base {}", table.len(), kind, base);
    if table.find("/").is_none() {
        summary.push_str("\nwarning: no route at '/'");
    }
    summary
}

/// Replay steps against an in-memory address bar, one output line per step.
pub fn walk(table: &Table, mode: &HistoryMode, steps: &[String]) -> String {
    let start = mode.href_at("/", &Address::parse("/"));
    let mut router = Router::new(table.clone(), mode.clone(), MemoryHistory::new(start));

    steps
        .iter()
        .map(|step| {
            let active = match step.as_str() {
                "back" => {
                    router.back();
                    router.sync()
                }
                "forward" => {
                    router.forward();
                    router.sync()
                }
                path => router.navigate(path),
            };
            let label = match active {
                ActiveRoute::Matched(route) => route.name().to_string(),
                ActiveRoute::Unmatched { .. } => "<unmatched>".to_string(),
            };
            format!("{:8} {}  {}", step, router.current_path(), label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
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

    fn config() -> (Table, HistoryMode) {
        devflow_core::load(CONFIG).unwrap()
    }

    #[test]
    fn test_list_routes_text() {
        let (table, mode) = config();
        let out = list_routes(&table, &mode, false).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "cursor-flow   /cursor-flow   /dev-flow-kit/cursor-flow");
    }

    #[test]
    fn test_list_routes_json() {
        let (table, mode) = config();
        let out = list_routes(&table, &mode, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["href"], "/dev-flow-kit/");
        assert_eq!(value[2]["name"], "json-cleaner");
    }

    #[test]
    fn test_resolve() {
        let (table, mode) = config();
        assert_eq!(
            resolve(&table, &mode, "/json-cleaner", false).unwrap(),
            "/json-cleaner -> json-cleaner (/dev-flow-kit/json-cleaner)"
        );
        assert_eq!(
            resolve(&table, &mode, "/unknown", false).unwrap(),
            "/unknown -> unmatched"
        );

        let json: serde_json::Value =
            serde_json::from_str(&resolve(&table, &mode, "/unknown", true).unwrap()).unwrap();
        assert_eq!(json["status"], "unmatched");
        assert_eq!(json["path"], "/unknown");
    }

    #[test]
    fn test_href() {
        let (table, mode) = config();
        assert_eq!(href(&table, &mode, "cursor-flow").unwrap(), "/dev-flow-kit/cursor-flow");
        assert!(href(&table, &mode, "mirror").is_err());
    }

    #[test]
    fn test_check() {
        let (table, mode) = config();
        assert_eq!(check(&table, &mode), "ok: 3 routes, browser history, base /dev-flow-kit");
    }

    #[test]
    fn test_walk() {
        let (table, mode) = config();
        let steps: Vec<String> = ["/cursor-flow", "/nope", "back", "forward"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = walk(&table, &mode, &steps);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "/cursor-flow /cursor-flow  cursor-flow");
        assert_eq!(lines[1], "/nope    /nope  <unmatched>");
        assert_eq!(lines[2], "back     /cursor-flow  cursor-flow");
        assert_eq!(lines[3], "forward  /nope  <unmatched>");
    }

    #[test]
    fn test_root_hash_mode_addresses() {
        let (table, _) = config();
        let mode = HistoryMode::hash("/");
        assert_eq!(href(&table, &mode, "cursor-flow").unwrap(), "#/cursor-flow");
        assert_eq!(check(&table, &mode), "ok: 3 routes, hash history, base /");

        let steps = vec!["/json-cleaner".to_string(), "/JSON-cleaner".to_string()];
        let out = walk(&table, &mode, &steps);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "/json-cleaner /json-cleaner  json-cleaner");
        assert_eq!(lines[1], "/JSON-cleaner /JSON-cleaner  <unmatched>");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read route config"));
    }
}
