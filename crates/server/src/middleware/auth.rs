//! Authentication extractors for bearer tokens.
//!
//! The original `Authorization: Bearer <token>` contract: a missing or
//! malformed header is a 401, a bad signature is a 401, and a valid token
//! without the admin flag is a 403 on admin routes.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::services::token::Claims;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(claims): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", claims.username)
/// }
/// ```
pub struct RequireUser(pub Claims);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

        let claims = state
            .tokens()
            .verify(token)
            .map_err(|e| AppError::Unauthorized(e.to_string()))?;

        Ok(Self(claims))
    }
}

/// Extractor that requires a valid bearer token with the admin flag.
///
/// Rejects with 401 when the token is missing or invalid, and 403 when the
/// authenticated user is not an admin.
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(claims) = RequireUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            return Err(AppError::Forbidden(format!(
                "user {} is not an admin",
                claims.username
            )));
        }

        Ok(Self(claims))
    }
}

/// Extractor that optionally reads a bearer token.
///
/// Unlike `RequireUser`, this never rejects: checkout works for guests,
/// but a logged-in shopper's order gets linked to their account.
pub struct OptionalUser(pub Option<Claims>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_token(parts).and_then(|token| state.tokens().verify(token).ok());

        Ok(Self(claims))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
