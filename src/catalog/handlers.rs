//! Product catalog HTTP handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResult, ok};

use super::models::{Product, ProductDraft};
use super::repository::ProductRepository;

/// Create a new product
///
/// POST /api/v1/products
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Product created", body = Product, content_type = "application/json"),
        (status = 400, description = "Invalid input or duplicate name")
    ),
    tag = "Catalog"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ProductDraft>,
) -> ApiResult<Product> {
    let product = ProductRepository::create(state.db.pool(), draft)
        .await
        .map_err(ApiError::from)?;
    ok(product)
}

/// List all products
///
/// GET /api/v1/products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>, content_type = "application/json")
    ),
    tag = "Catalog"
)]
pub async fn get_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    let products = ProductRepository::get_all(state.db.pool())
        .await
        .map_err(ApiError::from)?;
    ok(products)
}

/// Get a product by ID
///
/// GET /api/v1/products/{id}
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product, content_type = "application/json"),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Product> {
    let product = ProductRepository::get_by_id(state.db.pool(), id)
        .await
        .map_err(ApiError::from)?;
    ok(product)
}

/// Replace a product's fields (full update, not a patch)
///
/// PUT /api/v1/products/{id}
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Updated product", body = Product, content_type = "application/json"),
        (status = 400, description = "Invalid input or duplicate name"),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> ApiResult<Product> {
    let product = ProductRepository::update(state.db.pool(), id, draft)
        .await
        .map_err(ApiError::from)?;
    ok(product)
}

/// Delete a product by ID
///
/// DELETE /api/v1/products/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ProductRepository::delete(state.db.pool(), id)
        .await
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
