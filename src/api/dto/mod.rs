//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `client` - Client request/response DTOs
//! - `swimming_tool` - Swimming tool request/response DTOs
//! - `health` - Health check DTOs
//! - `error` - Common error response DTOs

mod client;
mod error;
mod health;
mod swimming_tool;

pub use client::{ClientRequest, ClientResponse};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use swimming_tool::{SwimmingToolRequest, SwimmingToolResponse};

use serde_json::Value;

/// Returns the value when it is a non-empty JSON string.
fn non_empty_str(value: &Option<Value>) -> Option<&str> {
    value.as_ref()?.as_str().filter(|s| !s.is_empty())
}
