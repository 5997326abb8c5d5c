//! Order entity

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use sqlx::FromRow;

use super::{EntityId, OrderItem};

/// Customer order.
///
/// `items` is only carried on creation: it is echoed back in the create
/// response but never loaded with the order row.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Order {
    #[serde(rename = "customerName")]
    #[sqlx(rename = "customerName")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub customer_name: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub total: i64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub status: String,
    #[sqlx(skip)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub items: Vec<OrderItem>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub id: EntityId,
}
