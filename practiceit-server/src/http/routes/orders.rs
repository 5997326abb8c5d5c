//! Order endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::Route;
use crate::db::{OrderItemRepo, OrderRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityIdPath, Payload};
use crate::http::server::AppState;
use crate::models::Order;

/// GET /orders - list all orders
#[tracing::instrument(skip_all)]
async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = OrderRepo::new(&state.pool).list().await?;
    Ok(Json(orders))
}

/// GET /order/{id} - get a single order
#[tracing::instrument(skip_all, fields(id = id))]
async fn get_order(
    State(state): State<Arc<AppState>>,
    EntityIdPath(id): EntityIdPath,
) -> Result<Json<Order>, ApiError> {
    let order = OrderRepo::new(&state.pool).get(id).await?;
    Ok(Json(order))
}

/// POST /orders - create an order and its items
///
/// Items are written after the order row, in payload order, each pointed
/// at the new order id. Without `atomic_orders` a failing item stops the
/// request but leaves the order row and earlier items in place.
///
/// The response echoes `items` as submitted.
#[tracing::instrument(skip_all)]
async fn create_order(
    State(state): State<Arc<AppState>>,
    Payload(order): Payload<Order>,
) -> Result<Json<Order>, ApiError> {
    let orders = OrderRepo::new(&state.pool);

    if state.policy.atomic_orders {
        let mut created = orders.create_with_items(&order).await?;
        created.items = order.items;
        return Ok(Json(created));
    }

    let created = orders.create(&order).await?;
    let items = OrderItemRepo::new(&state.pool);
    for (index, item) in created.items.iter().enumerate() {
        items
            .create(&item.for_order(created.id))
            .await
            .inspect_err(|_| {
                tracing::warn!(
                    order_id = created.id,
                    written = index,
                    "item insert failed, order left partially created"
                )
            })?;
    }

    Ok(Json(created))
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::get("/orders", list_orders),
        Route::get("/order/{id}", get_order),
        Route::post("/orders", create_order),
    ]
}
