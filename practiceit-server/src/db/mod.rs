//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - The pool is the only shared handle; it is passed explicitly to every
//!   repository, never held in a global
//! - Rely on DB constraints (primary keys, foreign keys) - no check-then-insert
//! - Multi-row writes are only transactional where the caller asks for it

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, DbConfig};
pub use repos::*;
pub use schema::Table;
