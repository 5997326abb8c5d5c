//! Shared fixtures for unit tests

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use crate::db::{create_pool, schema, DbConfig, OrderRepo, ProductRepo};
use crate::http::{build_router, AppState, RequestPolicy};
use crate::models::{Order, Product};

/// Fresh in-memory database with all tables created.
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = create_pool(&DbConfig::in_memory())
        .await
        .expect("in-memory pool");
    schema::migrate(&pool).await.expect("migrations");
    pool
}

pub(crate) fn product(code: &str) -> Product {
    Product {
        product_code: code.to_owned(),
        name: "ProductTest".into(),
        inventory: 1,
        price: 1,
        status: "testing".into(),
        id: 0,
    }
}

pub(crate) fn order(customer: &str) -> Order {
    Order {
        customer_name: customer.to_owned(),
        total: 132,
        status: "testStatus".into(),
        items: Vec::new(),
        id: 0,
    }
}

pub(crate) async fn seed_product(pool: &SqlitePool, code: &str) -> Product {
    ProductRepo::new(pool)
        .create(&product(code))
        .await
        .expect("seed product")
}

pub(crate) async fn seed_order(pool: &SqlitePool, customer: &str) -> Order {
    OrderRepo::new(pool)
        .create(&order(customer))
        .await
        .expect("seed order")
}

/// Router over a fresh in-memory database.
pub(crate) async fn test_app(policy: RequestPolicy) -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    let state = AppState {
        pool: pool.clone(),
        policy,
    };
    (build_router(state, false), pool)
}

/// Send one request and collect status and raw body.
pub(crate) async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Like [`send`], parsing the body as JSON.
pub(crate) async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
