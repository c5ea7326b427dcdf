//! # devflow-cli
//!
//! Inspect a devflow-kit route configuration without a browser.
//!
//! ## Usage
//!
//! - `devflow-cli routes` - List routes with their shareable addresses
//! - `devflow-cli resolve /json-cleaner` - Show which route a path selects
//! - `devflow-cli href mirror` - Print the address for a named route
//! - `devflow-cli check` - Validate the configuration
//! - `devflow-cli walk /mirror back /nope` - Replay a navigation sequence

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// devflow-cli - route table inspector for devflow-kit
#[derive(Parser)]
#[command(name = "devflow-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate a devflow-kit route configuration")]
struct Cli {
    /// Route configuration file
    #[arg(short, long, default_value = "config/routes.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route with its visible address
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve a logical path to a route
    Resolve {
        path: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the visible address for a named route
    Href { name: String },
    /// Validate the configuration and print a summary
    Check,
    /// Navigate through a sequence of paths in memory
    ///
    /// `back` and `forward` move through history instead of navigating.
    Walk {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let (table, mode) = commands::load_config(&cli.config)?;

    let output = match cli.command {
        Commands::Routes { json } => commands::list_routes(&table, &mode, json)?,
        Commands::Resolve { path, json } => commands::resolve(&table, &mode, &path, json)?,
        Commands::Href { name } => commands::href(&table, &mode, &name)?,
        Commands::Check => commands::check(&table, &mode),
        Commands::Walk { steps } => commands::walk(&table, &mode, &steps),
    };

    println!("{}", output);
    Ok(())
}
