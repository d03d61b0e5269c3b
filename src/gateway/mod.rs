//! HTTP gateway: router wiring and server startup
//!
//! The gateway is thin plumbing: it maps HTTP requests onto the catalog and
//! order repositories and serializes results into the unified
//! [`types::ApiResponse`] envelope.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{Router, routing::get, routing::patch, routing::post};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::handlers as catalog_handlers;
use crate::db::Database;
use crate::orders::handlers as order_handlers;
use state::AppState;

/// Build the application router with all routes wired to `state`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        // Product catalog
        .route(
            "/api/v1/products",
            post(catalog_handlers::create_product).get(catalog_handlers::get_products),
        )
        .route(
            "/api/v1/products/{id}",
            get(catalog_handlers::get_product)
                .put(catalog_handlers::update_product)
                .delete(catalog_handlers::delete_product),
        )
        // Orders
        .route(
            "/api/v1/orders",
            post(order_handlers::create_order).get(order_handlers::get_orders),
        )
        .route("/api/v1/orders/{id}", get(order_handlers::get_order))
        .route(
            "/api/v1/orders/{id}/status",
            patch(order_handlers::update_order_status),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, db: Arc<Database>) {
    let state = Arc::new(AppState::new(db));
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!(%addr, "Gateway started");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
