use std::sync::LazyLock;

use axum::extract::{FromRequest, Request};
use axum::Json;
use mongodb::bson::oid::ObjectId;
use regex::Regex;
use serde::de::DeserializeOwned;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .unwrap_or_else(|e| panic!("email pattern failed to compile: {e}"))
});

/// Approximate email shape check. `+` in the local part is rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Parses a 24-character hex ObjectId; anything else is `None`.
pub fn parse_identifier(raw: &str) -> Option<ObjectId> {
    if raw.len() != 24 {
        return None;
    }
    ObjectId::parse_str(raw).ok()
}

/// JSON body extractor that never rejects.
///
/// Missing bodies, a non-JSON content type, malformed JSON and bodies of the
/// wrong shape all yield `T::default()`, so handlers report the fields as
/// missing.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(LenientJson(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Ignoring unreadable request body");
                Ok(LenientJson(T::default()))
            }
        }
    }
}
