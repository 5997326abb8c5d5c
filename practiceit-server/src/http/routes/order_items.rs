//! Bulk order item endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::Route;
use crate::db::OrderItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::Payload;
use crate::http::server::AppState;
use crate::models::OrderItem;

/// POST /orderitems - insert order lines as submitted
///
/// Stops at the first failing line; lines before it stay written.
#[tracing::instrument(skip_all)]
async fn create_order_items(
    State(state): State<Arc<AppState>>,
    Payload(items): Payload<Vec<OrderItem>>,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    let repo = OrderItemRepo::new(&state.pool);
    for item in &items {
        repo.create(item).await?;
    }

    Ok(Json(items))
}

pub fn routes() -> Vec<Route> {
    vec![Route::post("/orderitems", create_order_items)]
}
