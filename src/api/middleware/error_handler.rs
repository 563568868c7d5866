//! Conversion of `AppError` into HTTP responses.
//!
//! This is the only place where errors are mapped to status codes and
//! bodies. Store failures are logged here at error level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Store { .. }
        | AppError::Internal { .. }
        | AppError::RawPayload { .. }
        | AppError::Unhandled { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    /// # Body Mapping
    /// - BadRequest, NotFound, Internal → `{message}`
    /// - Store → `{message, error}`
    /// - RawPayload → bare JSON string
    /// - Unhandled → `{message: "Internal Server Error"}`
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
            AppError::Store { message, source } => {
                tracing::error!(error = %source.detail(), "{}", message);
                (status, Json(ErrorResponse::new(message).with_error(source.detail())))
                    .into_response()
            }
            AppError::RawPayload { payload } => {
                tracing::error!("{}", payload);
                (status, Json(payload)).into_response()
            }
            AppError::Unhandled { source } => {
                tracing::error!(error = %source.detail(), "Unhandled store failure");
                (status, Json(ErrorResponse::new("Internal Server Error"))).into_response()
            }
        }
    }
}
