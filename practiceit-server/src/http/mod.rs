//! HTTP layer
//!
//! Axum server with:
//! - An explicit (method, path) route table
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelopes

pub mod error;
pub mod extractors;
pub mod policy;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use policy::{InputPolicy, RequestPolicy};
pub use routes::{route_table, Route};
pub use server::{build_router, run_server, AppState, ServerConfig};
