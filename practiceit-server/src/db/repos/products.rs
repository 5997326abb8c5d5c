//! Product repository

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{EntityId, Product};

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All products in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, productCode, name, inventory, price, status
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: EntityId) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, productCode, name, inventory, price, status
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "product",
            id: id.to_string(),
        })
    }

    /// Insert a product and return it with its assigned id.
    ///
    /// The `id` on the input is ignored.
    pub async fn create(&self, product: &Product) -> Result<Product, DbError> {
        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (productCode, name, inventory, price, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, productCode, name, inventory, price, status
            "#,
        )
        .bind(&product.product_code)
        .bind(&product.name)
        .bind(product.inventory)
        .bind(product.price)
        .bind(&product.status)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = created.id, "product created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{self, Table};
    use crate::test_support::{memory_pool, product};

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let pool = memory_pool().await;
        let repo = ProductRepo::new(&pool);

        let input = Product {
            id: 42,
            ..product("TEST12345")
        };
        let created = repo.create(&input).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, Product { id: 1, ..input });
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = memory_pool().await;
        let err = ProductRepo::new(&pool).get(101).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_empty_table() {
        let pool = memory_pool().await;
        assert!(ProductRepo::new(&pool).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_reflects_clear_then_insert() {
        let pool = memory_pool().await;
        let repo = ProductRepo::new(&pool);

        for code in ["A", "B", "C"] {
            repo.create(&product(code)).await.unwrap();
        }
        schema::clear(&pool, Table::Products).await.unwrap();
        for code in ["D", "E"] {
            repo.create(&product(code)).await.unwrap();
        }

        let listed = repo.list().await.unwrap();
        let codes: Vec<_> = listed.iter().map(|p| p.product_code.as_str()).collect();
        let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
        assert_eq!(codes, vec!["D", "E"]);
        assert_eq!(ids, vec![1, 2]);
    }
}
