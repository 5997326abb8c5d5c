//! Order line linking an order to a product

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use sqlx::FromRow;

use super::EntityId;

/// One product line on an order, identified by `(order_id, product_id)`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct OrderItem {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub order_id: EntityId,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub product_id: EntityId,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub quantity: i64,
}

impl OrderItem {
    /// Same line re-pointed at another order.
    pub fn for_order(&self, order_id: EntityId) -> Self {
        Self {
            order_id,
            ..self.clone()
        }
    }
}
