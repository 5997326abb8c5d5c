//! practiceit CLI - run and maintain the product/order API
//!
//! - `serve`: create missing tables and run the HTTP server
//! - `migrate`: create missing tables (optionally clearing all rows)
//! - `dump`: print all products and orders as JSON

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::FileConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "practiceit",
    author,
    version,
    about = "HTTP JSON API for products, orders and order items backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a TOML config file (default: ./practiceit.toml if present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables
    Migrate(commands::migrate::MigrateArgs),
    /// Print all stored products and orders as JSON
    Dump(commands::dump::DumpArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    let config = FileConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await?,
        Commands::Dump(args) => commands::run_dump(args, &config).await?,
    }
    Ok(())
}
