//! Print the stored data as JSON

use anyhow::{ensure, Context, Result};
use clap::Parser;
use practiceit_server::create_pool;
use practiceit_server::db::{OrderItemRepo, OrderRepo, ProductRepo};
use practiceit_server::models::{Order, Product};
use serde::Serialize;

use super::DbArgs;
use crate::config::FileConfig;

/// Arguments for the dump command
#[derive(Parser, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Everything in the database; orders carry their stored items
#[derive(Debug, Serialize)]
struct Snapshot {
    products: Vec<Product>,
    orders: Vec<Order>,
}

pub async fn run_dump(args: DumpArgs, config: &FileConfig) -> Result<()> {
    let db = config.db_config(args.db.db);
    // Opening would create an empty file and fail on the missing tables
    ensure!(
        db.is_memory() || db.path.exists(),
        "database not found: {} (run `practiceit migrate` first)",
        db.path.display()
    );
    let pool = create_pool(&db)
        .await
        .with_context(|| format!("Failed to open database {}", db.path.display()))?;

    let products = ProductRepo::new(&pool).list().await?;
    let mut orders = OrderRepo::new(&pool).list().await?;

    let items = OrderItemRepo::new(&pool);
    for order in &mut orders {
        order.items = items.list_for_order(order.id).await?;
    }

    let snapshot = Snapshot { products, orders };
    let output = if args.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{}", output);

    Ok(())
}
