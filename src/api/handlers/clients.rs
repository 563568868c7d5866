//! Client CRUD request handlers.
//!
//! Identifiers are checked here, before any store access; a malformed one
//! answers 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CLIENT_TAG;
use crate::api::dto::{ClientRequest, ClientResponse, ErrorResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::{parse_identifier, LenientJson};

/// Creates client routes, mounted under `/clients`.
pub fn client_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_clients, create_client))
        .routes(routes!(get_client, update_client, delete_client))
}

fn client_id(raw: &str) -> AppResult<ObjectId> {
    parse_identifier(raw).ok_or_else(|| AppError::bad_request("Invalid client ID format."))
}

/// GET /clients - List all clients
#[utoipa::path(
    get,
    path = "/",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Every stored client", body = Vec<ClientResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<ClientResponse>>> {
    let clients = state.services.clients.list_clients().await?;
    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// GET /clients/{id} - Get client by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "24-character hex client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 400, description = "Invalid client ID format", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ClientResponse>> {
    let id = client_id(&id)?;
    let client = state.services.clients.get_client(id).await?;
    Ok(Json(ClientResponse::from(client)))
}

/// POST /clients - Create a client
///
/// `ipaddress` is not stored on creation.
#[utoipa::path(
    post,
    path = "/",
    tag = CLIENT_TAG,
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created"),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 500, description = "Insert failed or was not acknowledged", body = ErrorResponse)
    )
)]
async fn create_client(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<ClientRequest>,
) -> AppResult<StatusCode> {
    let client = payload.into_new_client()?;
    state.services.clients.create_client(client).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /clients/{id} - Replace a client
#[utoipa::path(
    put,
    path = "/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "24-character hex client ID")
    ),
    request_body = ClientRequest,
    responses(
        (status = 204, description = "Client replaced"),
        (status = 400, description = "Invalid ID, missing fields or invalid email", body = ErrorResponse),
        (status = 404, description = "Client not found or data not modified", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(payload): LenientJson<ClientRequest>,
) -> AppResult<StatusCode> {
    let id = client_id(&id)?;
    let client = payload.into_replacement()?;
    state.services.clients.replace_client(id, client).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /clients/{id} - Delete a client
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "24-character hex client ID")
    ),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, description = "Invalid client ID format", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = client_id(&id)?;
    state.services.clients.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
