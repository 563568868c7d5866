//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{middleware, routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/` - Greeting
/// - `/clients` - Client CRUD operations
/// - `/swimmingTools` - Swimming tool CRUD operations
/// - `/health` - Store health check
/// - `/api-docs/openapi.json` - OpenAPI document
pub fn create_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/clients", handlers::clients::client_routes())
        .nest("/swimmingTools", handlers::swimming_tools::swimming_tool_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .route("/", get(hello))
        .route(OPENAPI_PATH, get(move || async move { Json(openapi) }))
        // Last added runs first, so logging sees the request id
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello World"
}
