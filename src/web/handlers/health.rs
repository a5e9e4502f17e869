//! # Health Check Handlers
//!
//! The two health endpoints consumed by monitors and load balancers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::web::response_types::ApiResponse;
use crate::web::state::AppState;

/// API liveness check: GET /v1/health/api
///
/// Confirms the process is accepting requests; never inspects dependencies.
pub async fn api_health(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.health.check_liveness().await;
    Json(ApiResponse::success())
}

/// Infrastructure readiness check: GET /v1/health/infrastructure
///
/// Probes every registered dependency concurrently and returns the
/// aggregated result. Responds 200 when healthy; an unhealthy system keeps
/// the historical 404 mapping so existing monitors stay compatible.
pub async fn infrastructure_health(State(state): State<AppState>) -> Response {
    let result = state.health.check_readiness().await;

    debug!(
        is_ok = result.is_ok,
        items = result.items.len(),
        "infrastructure health check served"
    );

    let status = if result.is_ok {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Json(result)).into_response()
}
