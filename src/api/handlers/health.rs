//! Health check endpoint.
//!
//! Pings the store directly through the handle in application state,
//! bypassing the service layer.

use std::collections::HashMap;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// # Responses
/// - `200 OK` - Store answered the ping
/// - `503 Service Unavailable` - Store did not answer
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_check = check_store(&state).await;
    let status = store_check.status;

    let mut checks = HashMap::new();
    checks.insert("store".to_string(), store_check);

    let response = HealthResponse {
        status,
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    };

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(response))
}

async fn check_store(state: &AppState) -> ComponentHealth {
    let start = Instant::now();
    let backend = state.store.backend_name();

    match state.store.ping().await {
        Ok(()) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some(format!("{} reachable", backend)),
            response_time_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!(backend, error = %e, "Store health check failed");
            ComponentHealth {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Ping failed: {}", e)),
                response_time_ms: Some(start.elapsed().as_millis() as u64),
            }
        }
    }
}
