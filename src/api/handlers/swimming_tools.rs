//! Swimming tool CRUD request handlers.
//!
//! Only update checks the identifier format up front. Get and delete hand
//! the raw identifier to the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SWIMMING_TOOL_TAG;
use crate::api::dto::{ErrorResponse, SwimmingToolRequest, SwimmingToolResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::{parse_identifier, LenientJson};

/// Creates swimming tool routes, mounted under `/swimmingTools`.
pub fn swimming_tool_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_tools, create_tool))
        .routes(routes!(get_tool, update_tool, delete_tool))
}

/// GET /swimmingTools - List all swimming tools
#[utoipa::path(
    get,
    path = "/",
    tag = SWIMMING_TOOL_TAG,
    responses(
        (status = 200, description = "Every stored swimming tool", body = Vec<SwimmingToolResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_tools(State(state): State<AppState>) -> AppResult<Json<Vec<SwimmingToolResponse>>> {
    let tools = state.services.swimming_tools.list_tools().await?;
    Ok(Json(tools.into_iter().map(SwimmingToolResponse::from).collect()))
}

/// GET /swimmingTools/{id} - Get swimming tool by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = SWIMMING_TOOL_TAG,
    params(
        ("id" = String, Path, description = "Swimming tool ID")
    ),
    responses(
        (status = 200, description = "Swimming tool found", body = SwimmingToolResponse),
        (status = 404, description = "Swimming tool not found", body = ErrorResponse),
        (status = 500, description = "Unparsable ID or store failure", body = ErrorResponse)
    )
)]
async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SwimmingToolResponse>> {
    let tool = state.services.swimming_tools.get_tool(&id).await?;
    Ok(Json(SwimmingToolResponse::from(tool)))
}

/// POST /swimmingTools - Create a swimming tool
#[utoipa::path(
    post,
    path = "/",
    tag = SWIMMING_TOOL_TAG,
    request_body = SwimmingToolRequest,
    responses(
        (status = 201, description = "Swimming tool created"),
        (status = 400, description = "Missing fields or invalid price", body = ErrorResponse),
        (status = 500, description = "Insert not acknowledged; body is a bare JSON string", body = String)
    )
)]
async fn create_tool(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<SwimmingToolRequest>,
) -> AppResult<StatusCode> {
    let tool = payload.into_tool()?;
    state.services.swimming_tools.create_tool(tool).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /swimmingTools/{id} - Replace a swimming tool
#[utoipa::path(
    put,
    path = "/{id}",
    tag = SWIMMING_TOOL_TAG,
    params(
        ("id" = String, Path, description = "24-character hex swimming tool ID")
    ),
    request_body = SwimmingToolRequest,
    responses(
        (status = 204, description = "Swimming tool replaced"),
        (status = 400, description = "Invalid ID, missing fields or invalid price", body = ErrorResponse),
        (status = 404, description = "Swimming tool not found or data not modified", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(payload): LenientJson<SwimmingToolRequest>,
) -> AppResult<StatusCode> {
    let id = parse_identifier(&id).ok_or_else(|| AppError::bad_request("Invalid tool ID format."))?;
    let tool = payload.into_tool()?;
    state.services.swimming_tools.replace_tool(id, tool).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /swimmingTools/{id} - Delete a swimming tool
///
/// Deleting an unknown ID answers 500, not 404.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SWIMMING_TOOL_TAG,
    params(
        ("id" = String, Path, description = "Swimming tool ID")
    ),
    responses(
        (status = 204, description = "Swimming tool deleted"),
        (status = 500, description = "Nothing deleted; body is a bare JSON string", body = String)
    )
)]
async fn delete_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.swimming_tools.delete_tool(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
