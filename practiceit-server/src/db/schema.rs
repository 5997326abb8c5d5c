//! Table definitions and maintenance

use sqlx::SqlitePool;

/// Tables owned by this service, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Products,
    Orders,
    OrderItems,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Products, Table::Orders, Table::OrderItems];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::OrderItems => "order_items",
        }
    }

    /// Whether ids come from an AUTOINCREMENT sequence.
    fn has_sequence(&self) -> bool {
        !matches!(self, Self::OrderItems)
    }
}

/// Create all tables if they don't exist.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            productCode VARCHAR(25) NOT NULL,
            name VARCHAR(256) NOT NULL,
            inventory INT NOT NULL,
            price INT NOT NULL,
            status VARCHAR(64) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customerName VARCHAR(50) NOT NULL,
            total INT NOT NULL,
            status VARCHAR(25) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS order_items (
            order_id INT NOT NULL REFERENCES orders(id),
            product_id INT NOT NULL REFERENCES products(id),
            quantity INT NOT NULL,
            PRIMARY KEY (order_id, product_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

/// Delete every row in `table` and restart its id sequence at 1.
pub async fn clear(pool: &SqlitePool, table: Table) -> Result<(), sqlx::Error> {
    // Table names come from the enum, never from input.
    sqlx::query(&format!("DELETE FROM {}", table.as_str()))
        .execute(pool)
        .await?;

    if table.has_sequence() {
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
            .bind(table.as_str())
            .execute(pool)
            .await?;
    }

    Ok(())
}

/// Clear all tables, children first so foreign keys hold.
pub async fn clear_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in Table::ALL.iter().rev() {
        clear(pool, *table).await?;
    }
    Ok(())
}
