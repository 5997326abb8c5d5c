//! Order item repository

use sqlx::{Executor, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{EntityId, OrderItem};

/// Insert one order line through any executor (pool or open transaction).
pub(super) async fn insert<'e, E>(executor: E, item: &OrderItem) -> Result<OrderItem, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, OrderItem>(
        r#"
        INSERT INTO order_items (order_id, product_id, quantity)
        VALUES (?, ?, ?)
        RETURNING order_id, product_id, quantity
        "#,
    )
    .bind(item.order_id)
    .bind(item.product_id)
    .bind(item.quantity)
    .fetch_one(executor)
    .await
}

/// Order item repository
pub struct OrderItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one order line exactly as given.
    ///
    /// Duplicate `(order_id, product_id)` pairs and dangling references are
    /// rejected by the storage engine.
    pub async fn create(&self, item: &OrderItem) -> Result<OrderItem, DbError> {
        Ok(insert(self.pool, item).await?)
    }

    /// Get a single line by its composite key.
    pub async fn get(&self, order_id: EntityId, product_id: EntityId) -> Result<OrderItem, DbError> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_id, product_id, quantity
            FROM order_items
            WHERE order_id = ? AND product_id = ?
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "order item",
            id: format!("{}/{}", order_id, product_id),
        })
    }

    /// Lines of one order in insertion order.
    pub async fn list_for_order(&self, order_id: EntityId) -> Result<Vec<OrderItem>, DbError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_id, product_id, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
