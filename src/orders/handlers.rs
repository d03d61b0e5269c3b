//! Order HTTP handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResult, ok};

use super::models::{Order, OrderDraft};
use super::repository::OrderRepository;

/// Status update request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdate {
    #[schema(example = "shipped")]
    pub status: String,
}

/// Place a new order
///
/// POST /api/v1/orders
///
/// Validates stock for every item, creates the order with its items and
/// decrements product stock, all in one transaction.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = OrderDraft,
    responses(
        (status = 200, description = "Order placed", body = Order, content_type = "application/json"),
        (status = 400, description = "Invalid input or insufficient stock"),
        (status = 404, description = "Referenced product not found")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<OrderDraft>,
) -> ApiResult<Order> {
    let order = OrderRepository::place_order(state.db.pool(), draft)
        .await
        .map_err(ApiError::from)?;
    ok(order)
}

/// List all orders with their items
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "All orders with items", body = Vec<Order>, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn get_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    let orders = OrderRepository::get_all(state.db.pool())
        .await
        .map_err(ApiError::from)?;
    ok(orders)
}

/// Get an order by ID with its items
///
/// GET /api/v1/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Order> {
    let order = OrderRepository::get_by_id(state.db.pool(), id)
        .await
        .map_err(ApiError::from)?;
    ok(order)
}

/// Update an order's status
///
/// PATCH /api/v1/orders/{id}/status
///
/// Overwrites the status unconditionally; any string is accepted.
#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}/status",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Refreshed order", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<Order> {
    let order = OrderRepository::update_status(state.db.pool(), id, &update.status)
        .await
        .map_err(ApiError::from)?;
    ok(order)
}
