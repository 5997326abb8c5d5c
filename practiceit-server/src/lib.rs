//! practiceit-server: HTTP JSON API over SQLite
//!
//! Create/read endpoints for products, orders and order items. The
//! pool is created once by the caller and passed into the router state.

pub mod db;
pub mod error;
pub mod http;
pub mod models;

#[cfg(test)]
mod test_support;

pub use db::{create_pool, DbConfig, DbError};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, InputPolicy, RequestPolicy, ServerConfig};

/// Open the database, create missing tables and serve until shutdown.
pub async fn serve(db: &DbConfig, config: ServerConfig) -> Result<()> {
    let pool = create_pool(db).await?;
    db::schema::migrate(&pool).await?;

    run_server(pool, config).await
}
