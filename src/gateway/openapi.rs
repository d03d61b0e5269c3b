//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::catalog::models::{Product, ProductDraft};
use crate::gateway::handlers::HealthResponse;
use crate::orders::handlers::StatusUpdate;
use crate::orders::models::{Order, OrderDraft, OrderItem, OrderItemDraft};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom Order Management API",
        version = "1.0.0",
        description = "Product catalog CRUD and transactional order placement."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        // Catalog
        crate::catalog::handlers::create_product,
        crate::catalog::handlers::get_products,
        crate::catalog::handlers::get_product,
        crate::catalog::handlers::update_product,
        crate::catalog::handlers::delete_product,
        // Orders
        crate::orders::handlers::create_order,
        crate::orders::handlers::get_orders,
        crate::orders::handlers::get_order,
        crate::orders::handlers::update_order_status,
    ),
    components(
        schemas(
            HealthResponse,
            Product,
            ProductDraft,
            Order,
            OrderItem,
            OrderDraft,
            OrderItemDraft,
            StatusUpdate,
        )
    ),
    tags(
        (name = "Catalog", description = "Product catalog CRUD"),
        (name = "Orders", description = "Order placement and status management"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Stockroom Order Management API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Stockroom Order Management API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/products"));
        assert!(paths.paths.contains_key("/api/v1/products/{id}"));
        assert!(paths.paths.contains_key("/api/v1/orders"));
        assert!(paths.paths.contains_key("/api/v1/orders/{id}/status"));
    }
}
