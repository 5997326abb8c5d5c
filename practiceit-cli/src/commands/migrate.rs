//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;
use practiceit_server::create_pool;
use practiceit_server::db::schema;

use super::DbArgs;
use crate::config::FileConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// Delete all rows and restart id sequences after migrating
    #[arg(long)]
    pub reset: bool,
}

pub async fn run_migrate(args: MigrateArgs, config: &FileConfig) -> Result<()> {
    let db = config.db_config(args.db.db);
    let pool = create_pool(&db)
        .await
        .with_context(|| format!("Failed to open database {}", db.path.display()))?;

    schema::migrate(&pool).await.context("Migration failed")?;

    if args.reset {
        schema::clear_all(&pool).await.context("Reset failed")?;
        tracing::info!("All tables cleared");
    }

    Ok(())
}
