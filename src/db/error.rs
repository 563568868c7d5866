use thiserror::Error;

/// Failures raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier cannot be converted to the store's native key type.
    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    /// The store could not be reached or the handle is closed.
    #[error("Store connection error: {message}")]
    Connection { message: String },

    /// A single store operation failed.
    #[error("Store operation failed: {operation} on {collection}")]
    Operation {
        operation: &'static str,
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl StoreError {
    pub fn operation(
        operation: &'static str,
        collection: &'static str,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        StoreError::Operation {
            operation,
            collection,
            source: source.into(),
        }
    }

    /// Full error chain, suitable for the `error` field of a response body.
    pub fn detail(&self) -> String {
        match self {
            StoreError::Operation { source, .. } => format!("{}: {:#}", self, source),
            _ => self.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
