//! API response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError` / `ApiResult<T>`: Handler-level error plumbing
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CatalogError;
use crate::orders::OrderError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_STOCK: i32 = 1002;
    pub const DUPLICATE_NAME: i32 = 1003;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

// ============================================================================
// Handler Error Type
// ============================================================================

/// Result type returned by all gateway handlers
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Success shorthand for handlers
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// Handler-level error: HTTP status plus stable API error code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg)
    }

    pub fn db_error(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    /// Convert into the Err variant of an [`ApiResult`]
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        (self.status, body).into_response()
    }
}

// ============================================================================
// Domain Error Mapping
// ============================================================================

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::not_found(e.to_string()),
            CatalogError::DuplicateName(_) => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::DUPLICATE_NAME,
                e.to_string(),
            ),
            CatalogError::InvalidInput(_) => ApiError::bad_request(e.to_string()),
            CatalogError::Database(ref inner) => {
                tracing::error!("Catalog database error: {}", inner);
                ApiError::db_error(e.to_string())
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            // ProductNotFound carries the offending product_id in the message
            OrderError::NotFound(_) | OrderError::ProductNotFound(_) => {
                ApiError::not_found(e.to_string())
            }
            OrderError::InsufficientStock(_) => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_STOCK,
                e.to_string(),
            ),
            OrderError::InvalidInput(_) => ApiError::bad_request(e.to_string()),
            OrderError::Database(ref inner) => {
                tracing::error!("Order database error: {}", inner);
                ApiError::db_error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_mapping() {
        let err = ApiError::from(CatalogError::NotFound(42));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::NOT_FOUND);
        assert!(err.msg.contains("42"));

        let err = ApiError::from(CatalogError::DuplicateName("Widget".to_string()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::DUPLICATE_NAME);
        assert!(err.msg.contains("Widget"));

        let err = ApiError::from(CatalogError::InvalidInput("price".to_string()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INVALID_PARAMETER);
    }

    #[test]
    fn test_order_error_mapping() {
        let err = ApiError::from(OrderError::ProductNotFound(7));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.msg.contains("7"), "must identify the offending id");

        let err = ApiError::from(OrderError::InsufficientStock(7));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INSUFFICIENT_STOCK);
        assert!(err.msg.contains("7"));

        let err = ApiError::from(OrderError::NotFound(3));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(5u32);
        assert_eq!(resp.code, error_codes::SUCCESS);
        assert_eq!(resp.msg, "ok");
        assert_eq!(resp.data, Some(5));

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"code":0,"msg":"ok","data":5}"#);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<()>::error(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
    }
}
