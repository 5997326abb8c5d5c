//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one request and
//! maps rows straight into the entity types in [`crate::models`].

pub mod order_items;
pub mod orders;
pub mod products;

pub use order_items::OrderItemRepo;
pub use orders::OrderRepo;
pub use products::ProductRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Anything the storage engine reported, passed through verbatim
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DbError::NotFound {
            resource: "product",
            id: "101".into(),
        };
        assert_eq!(err.to_string(), "not found: product '101'");
        assert!(err.is_not_found());
    }

    #[test]
    fn storage_errors_keep_backend_message() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
        assert!(!err.is_not_found());
    }
}
