use thiserror::Error;

use crate::db::StoreError;

/// Request-level error. Each variant fixes the HTTP status and body shape
/// it is rendered with (see `api::middleware::error_handler`).
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected before the store is touched.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// The store answered but nothing matched.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Store call failed; the detail is echoed in the `error` field.
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },

    /// Store call succeeded but reported an outcome the handler treats as failure.
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Failure rendered as a bare JSON string rather than an object.
    #[error("{payload}")]
    RawPayload { payload: String },

    /// Store failure on a route with no dedicated message.
    #[error("Unhandled store failure")]
    Unhandled {
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn raw(payload: impl Into<String>) -> Self {
        Self::RawPayload {
            payload: payload.into(),
        }
    }

    /// Wraps a store failure with the route's user-facing message.
    pub fn store(message: impl Into<String>) -> impl FnOnce(StoreError) -> Self {
        let message = message.into();
        move |source| Self::Store { message, source }
    }
}

impl From<StoreError> for AppError {
    fn from(source: StoreError) -> Self {
        AppError::Unhandled { source }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
