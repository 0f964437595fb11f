/**
 * Authentication Extractors
 *
 * This module provides Axum extractors for routes that require (or may
 * use) an authenticated user. They read the JWT from the Authorization
 * header and hand the verified user ID to handlers.
 *
 * Both the RealWorld `Token <jwt>` scheme and the plain `Bearer <jwt>`
 * scheme are accepted.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Optional variant of [`AuthUser`] for endpoints where authentication
/// merely enriches the response (article listings, profile reads).
///
/// A missing header yields `None`; a present-but-invalid token also yields
/// `None` rather than failing the request.
#[derive(Clone, Copy, Debug)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|user| user.user_id)
    }
}

/// Strip the auth scheme prefix from an Authorization header value
fn token_from_header(value: &str) -> Option<&str> {
    value
        .strip_prefix("Token ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Run the full header-to-user pipeline:
///
/// 1. Read the Authorization header
/// 2. Strip the scheme prefix
/// 3. Verify the token signature and expiry
/// 4. Parse the user ID from the claims
fn authenticate(parts: &Parts) -> Result<AuthUser, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = token_from_header(header).ok_or_else(|| {
        tracing::warn!("invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("invalid token: {e:?}");
        ApiError::Unauthorized
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("invalid user ID in token: {e:?}");
        ApiError::Unauthorized
    })?;

    Ok(AuthUser { user_id })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts)
    }
}

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(authenticate(parts).ok()))
    }
}
