//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use super::DbArgs;
use crate::config::{FileConfig, ServerOverrides};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:9003)
    #[arg(long, short = 'b', env = "PRACTICEIT_BIND")]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub db: DbArgs,

    /// Reject non-numeric ids and malformed JSON bodies instead of using zero values
    #[arg(long)]
    pub strict: bool,

    /// Create an order and its items in a single transaction
    #[arg(long)]
    pub atomic_orders: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &FileConfig) -> Result<()> {
    let db = config.db_config(args.db.db);
    let server = config.server_config(&ServerOverrides {
        bind: args.bind,
        cors_permissive: args.cors_permissive,
        strict: args.strict,
        atomic_orders: args.atomic_orders,
    });

    tracing::info!(
        "Starting practiceit server on {} (database: {})",
        server.bind_addr,
        db.path.display()
    );

    // Blocks until shutdown
    practiceit_server::serve(&db, server)
        .await
        .context("Server error")?;

    Ok(())
}
