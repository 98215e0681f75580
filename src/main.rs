//! Route table inspection CLI.
//!
//! Loads a TOML route table, builds the registry and prints it in
//! registration order, matching order, or a single route by name.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_registry::config::{load_config, validate_log_level, ConfigError};
use route_registry::observability::logging;
use route_registry::Route;

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Inspect a route table", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List route names in registration order
    Names,
    /// List routes in matching order (static first)
    Iterate,
    /// Print a single route as JSON
    Show {
        /// Route name
        name: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        validate_log_level(&level).map_err(|err| ConfigError::Validation(vec![err]))?;
        config.observability.log_level = level;
    }
    logging::init(&config.observability)?;

    tracing::info!(
        path = ?cli.config,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let registry = config.build_registry()?;

    match cli.command {
        Commands::Names => {
            for name in registry.get_routes_names() {
                println!("{}", name);
            }
        }
        Commands::Iterate => {
            for route in registry.iter_routes() {
                let route = route?;
                let kind = if route.is_dynamic() { "dynamic" } else { "static" };
                println!("{:<8} {:<24} {}", kind, route.name(), route.uri);
            }
        }
        Commands::Show { name } => {
            let route = registry.get_route_by_name(&name)?;
            println!("{}", serde_json::to_string_pretty(route.as_ref())?);
        }
    }

    Ok(())
}
