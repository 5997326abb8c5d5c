//! Product endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::Route;
use crate::db::ProductRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityIdPath, Payload};
use crate::http::server::AppState;
use crate::models::Product;

/// GET /products - list all products
#[tracing::instrument(skip_all)]
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(products))
}

/// GET /product/{id} - get a single product
#[tracing::instrument(skip_all, fields(id = id))]
async fn get_product(
    State(state): State<Arc<AppState>>,
    EntityIdPath(id): EntityIdPath,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(product))
}

/// POST /products - create a product
#[tracing::instrument(skip_all)]
async fn create_product(
    State(state): State<Arc<AppState>>,
    Payload(product): Payload<Product>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).create(&product).await?;
    Ok(Json(product))
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::get("/products", list_products),
        Route::get("/product/{id}", get_product),
        Route::post("/products", create_product),
    ]
}
