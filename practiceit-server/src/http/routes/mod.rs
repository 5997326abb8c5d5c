//! Route handlers organized by resource
//!
//! Each module contributes its `(method, path)` entries to the route
//! table; paths are matched exactly as listed.

use std::sync::Arc;

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};

use super::server::AppState;

pub mod greeting;
pub mod order_items;
pub mod orders;
pub mod products;

/// One entry of the route table
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub(crate) handler: MethodRouter<Arc<AppState>>,
}

impl Route {
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path,
            handler: routing::get(handler),
        }
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, Arc<AppState>>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path,
            handler: routing::post(handler),
        }
    }
}

/// Every route the server answers.
pub fn route_table() -> Vec<Route> {
    let mut table = Vec::new();
    table.extend(greeting::routes());
    table.extend(products::routes());
    table.extend(orders::routes());
    table.extend(order_items::routes());
    table
}
