//! Client DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::non_empty_str;
use crate::error::{AppError, AppResult};
use crate::models::Client;
use crate::utils::is_valid_email;

const MISSING_FIELDS: &str = "Missing required fields: name, email, or company.";
const INVALID_EMAIL: &str = "Invalid email format.";

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or replacing a client.
///
/// Fields are kept as raw JSON values so that wrong types are reported as
/// missing fields instead of deserialization errors.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Ada Lovelace",
    "email": "ada@example.com",
    "company": "Analytical Engines",
    "ipaddress": "10.0.0.1"
}))]
pub struct ClientRequest {
    #[schema(value_type = String)]
    pub name: Option<Value>,
    #[schema(value_type = String, format = "email")]
    pub email: Option<Value>,
    #[schema(value_type = String)]
    pub company: Option<Value>,
    /// Honored on update only.
    #[schema(value_type = Option<String>)]
    pub ipaddress: Option<Value>,
}

impl ClientRequest {
    /// Validates the body for insertion. `ipaddress` is ignored.
    pub fn into_new_client(self) -> AppResult<Client> {
        let mut client = self.validated()?;
        client.ipaddress = None;
        Ok(client)
    }

    /// Validates the body as a full replacement, keeping `ipaddress`.
    pub fn into_replacement(self) -> AppResult<Client> {
        self.validated()
    }

    fn validated(self) -> AppResult<Client> {
        let (Some(name), Some(email), Some(company)) = (
            non_empty_str(&self.name),
            non_empty_str(&self.email),
            non_empty_str(&self.company),
        ) else {
            return Err(AppError::bad_request(MISSING_FIELDS));
        };

        if !is_valid_email(email) {
            return Err(AppError::bad_request(INVALID_EMAIL));
        }

        Ok(Client {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            ipaddress: self
                .ipaddress
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Stored client as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClientResponse {
    /// 24-character hex identifier
    #[serde(rename = "_id")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: client.name,
            email: client.email,
            company: client.company,
            ipaddress: client.ipaddress,
        }
    }
}
