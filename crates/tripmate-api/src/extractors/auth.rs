//! `AuthUser` extractor: verifies the bearer token and injects the request
//! context.
//!
//! TripMate does not issue tokens; the identity provider is an external
//! collaborator. The extractor only verifies the HMAC signature and expiry
//! against the shared secret from [`AuthConfig`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tripmate_core::config::auth::AuthConfig;
use tripmate_core::error::{AppError, ErrorKind};
use tripmate_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims TripMate expects in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// The authenticated user's ID.
    pub sub: Uuid,
    /// The authenticated user's username.
    pub username: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn decode_token(token: &str, auth: &AuthConfig) -> Result<AccessClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = auth.leeway_seconds;

    let data = jsonwebtoken::decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AppError::with_source(ErrorKind::Authentication, "auth.token.invalid", e))?;

    Ok(data.claims)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("auth.header.missing"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("auth.header.malformed"))?;

        let claims = decode_token(token, &state.config.auth)?;

        Ok(AuthUser(RequestContext::new(claims.sub, claims.username)))
    }
}
