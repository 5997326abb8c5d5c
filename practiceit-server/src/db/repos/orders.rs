//! Order repository
//!
//! Handles order rows with:
//! - Plain creation of the order row alone (items are the caller's job)
//! - Atomic creation of the order together with its items (transaction)

use sqlx::{Executor, Sqlite, SqlitePool};

use super::{order_items, DbError};
use crate::models::{EntityId, Order};

async fn insert<'e, E>(executor: E, order: &Order) -> Result<Order, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (customerName, total, status)
        VALUES (?, ?, ?)
        RETURNING id, customerName, total, status
        "#,
    )
    .bind(&order.customer_name)
    .bind(order.total)
    .bind(&order.status)
    .fetch_one(executor)
    .await
}

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All orders in insertion order, without items.
    pub async fn list(&self) -> Result<Vec<Order>, DbError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customerName, total, status
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get a single order by id, without items.
    pub async fn get(&self, id: EntityId) -> Result<Order, DbError> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customerName, total, status
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "order",
            id: id.to_string(),
        })
    }

    /// Insert the order row only.
    ///
    /// The returned order carries the assigned id and the input's `items`
    /// unchanged; none of them are written.
    pub async fn create(&self, order: &Order) -> Result<Order, DbError> {
        let mut created = insert(self.pool, order).await?;
        created.items = order.items.clone();

        tracing::debug!(id = created.id, "order created");
        Ok(created)
    }

    /// Insert the order and all of its items (atomic).
    ///
    /// Each item is re-pointed at the new order id. If any insert fails
    /// the transaction is dropped and nothing is persisted.
    pub async fn create_with_items(&self, order: &Order) -> Result<Order, DbError> {
        let mut tx = self.pool.begin().await?;

        let mut created = insert(&mut *tx, order).await?;
        let mut items = Vec::with_capacity(order.items.len());
        for item in &order.items {
            let item = order_items::insert(&mut *tx, &item.for_order(created.id)).await?;
            items.push(item);
        }

        tx.commit().await?;
        created.items = items;

        tracing::debug!(id = created.id, items = created.items.len(), "order created with items");
        Ok(created)
    }
}
