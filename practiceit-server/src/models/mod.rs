//! Entity types shared by the repositories and the HTTP layer
//!
//! Field names on the wire follow the stored column names
//! (`productCode`, `customerName`, `order_id`, ...). A field that is
//! absent, `null` or of the wrong JSON type decodes to its zero value
//! while the other fields keep theirs.

pub mod id;
pub mod order;
pub mod order_item;
pub mod product;

pub use id::{parse_entity_id, EntityId};
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
