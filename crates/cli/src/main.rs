//! Cradle CLI - browse the baby-care catalog and replay shop sessions.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered
//! cradle-cli products
//! cradle-cli products --search organic --category Clothing
//!
//! # Show one product
//! cradle-cli show 3
//!
//! # Category menu with counts
//! cradle-cli categories
//!
//! # Replay shop events and print the resulting cart
//! cradle-cli replay add:1 add:2 add:1 remove:2 fav:3
//!
//! # Use another catalog file
//! cradle-cli --catalog my-catalog.json products
//! ```
//!
//! # Commands
//!
//! - `products` - List products matching a search and category
//! - `show` - Show one product in detail
//! - `categories` - List the category menu
//! - `replay` - Apply shop events to a fresh session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod commands;
mod config;
mod error;
mod render;

use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "cradle-cli")]
#[command(author, version, about = "Cradle shop catalog and cart tools")]
struct Cli {
    /// Catalog file (YAML, or JSON by extension); overrides `CRADLE_CATALOG_PATH`
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive text matched against name and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category tag, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
    /// List categories with product counts
    Categories,
    /// Apply shop events to a fresh session (`add:<id>`, `remove:<id>`,
    /// `fav:<id>`, `search:<text>`, `category:<tag>`, `clear`)
    Replay {
        /// Events, applied in order
        #[arg(required = true)]
        events: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::from_env();
    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::default(), |config| config.log_format),
    );

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so command output stays clean on stdout.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cradle_cli=info,cradle_shop=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli, config: CliConfig) -> Result<(), CliError> {
    let config = config.with_catalog_override(cli.catalog);
    let catalog = catalog::load(&config)?;

    let output = match cli.command {
        Commands::Products { search, category } => {
            commands::products::list(&catalog, &search, &category)?
        }
        Commands::Show { id } => commands::products::show(&catalog, &id)?,
        Commands::Categories => commands::products::categories(&catalog),
        Commands::Replay { events } => commands::replay::run(Arc::new(catalog), &events)?,
    };

    println!("{output}");
    Ok(())
}
