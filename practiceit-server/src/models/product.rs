//! Product entity

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use sqlx::FromRow;

use super::EntityId;

/// Catalog product.
///
/// `id` is assigned by storage on insert; any value supplied by a client
/// is ignored.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(rename = "productCode")]
    #[sqlx(rename = "productCode")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub product_code: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub inventory: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub price: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub id: EntityId,
}
