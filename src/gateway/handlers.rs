//! Gateway-level handlers (health check)

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::state::AppState;
use super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings the database but exposes no internal details in the response.
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms}}
/// - Unhealthy: 503 Service Unavailable + {code: 503, msg: "unavailable"}
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                timestamp_ms: now_ms,
            })),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    code: 503,
                    msg: "unavailable".to_string(),
                    data: None,
                }),
            )
        }
    }
}
