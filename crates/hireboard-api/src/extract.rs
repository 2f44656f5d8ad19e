//! Authenticated identity extractor.
//!
//! The gate already verified the token and injected `x-user-id` and
//! `x-user-role`; handlers extract them without touching cryptography again.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hireboard_models::Role;

use crate::error::ApiError;

/// Identity of the authenticated caller, as injected by the gate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing identity"))?
            .to_string();

        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing role"))?
            .parse::<Role>()
            .map_err(|_| ApiError::unauthorized("Unknown role"))?;

        Ok(AuthUser { id, role })
    }
}
