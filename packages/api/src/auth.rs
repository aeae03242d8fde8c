// ABOUTME: Request identity for API handlers
// ABOUTME: The session layer in front of this service forwards the user id

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity forwarded by the session layer; absent means anonymous
#[derive(Debug, Clone)]
pub struct RequestUser {
    pub id: Option<String>,
}

impl RequestUser {
    pub fn anonymous() -> Self {
        Self { id: None }
    }
}

impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(Self { id })
    }
}
