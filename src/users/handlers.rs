/**
 * User Handlers
 *
 * Registration, login, current-user and update-user endpoints.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never returned
 * - Register and login issue a fresh JWT; the other endpoints only accept
 *   one
 */

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::tokens::create_token;
use crate::error::types::is_unique_violation;
use crate::error::{ApiError, FieldErrors};
use crate::middleware::AuthUser;
use crate::users::repo;
use crate::users::types::{
    AuthUserData, AuthUserResponse, LoginUserRequest, RegisterUserData, RegisterUserRequest,
    UpdateUserData, UpdateUserRequest, UserData, UserDataResponse,
};

fn validate_registration(data: &RegisterUserData) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();

    if data.username.trim().is_empty() {
        errors.add("username", "can't be blank");
    }
    if data.email.trim().is_empty() {
        errors.add("email", "can't be blank");
    } else if !data.email.contains('@') {
        errors.add("email", "is invalid");
    }
    if data.password.len() < 8 {
        errors.add("password", "is too short (minimum is 8 characters)");
    }

    errors.into_result()
}

fn validate_update(data: &UpdateUserData) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();

    if data.email.trim().is_empty() {
        errors.add("email", "can't be blank");
    } else if !data.email.contains('@') {
        errors.add("email", "is invalid");
    }

    errors.into_result()
}

/// `POST /api/users` - register a new user
///
/// # Errors
///
/// * `422` - blank username/email, malformed email, or password shorter
///   than 8 characters
/// * `409` - username or email already registered
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<AuthUserResponse>, ApiError> {
    let data = request.user;
    tracing::info!("registration request for username: {}", data.username);

    validate_registration(&data)?;

    let password_hash = hash_password(&data.password)?;

    let record = repo::create_user(&pool, &data.username, &data.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                // Username conflicts come back as None; this is the email.
                ApiError::conflict("a user with this email already exists")
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| {
            tracing::warn!("username already exists: {}", data.username);
            ApiError::conflict("a user with this username already exists")
        })?;

    let token = create_token(record.id).map_err(|e| {
        tracing::error!("failed to create token: {e:?}");
        ApiError::internal("token generation failed")
    })?;

    tracing::info!("user created: {} ({})", record.username, record.email);

    Ok(Json(AuthUserResponse {
        user: AuthUserData::from_record(record, token),
    }))
}

/// `POST /api/users/login` - authenticate with email and password
///
/// # Errors
///
/// * `404` - unknown email or wrong password
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginUserRequest>,
) -> Result<Json<AuthUserResponse>, ApiError> {
    let data = request.user;
    tracing::info!("login request for email: {}", data.email);

    let record = repo::get_user_by_email(&pool, &data.email)
        .await?
        .filter(|record| verify_password(&data.password, &record.password_hash))
        .ok_or_else(|| {
            tracing::warn!("login failed for email: {}", data.email);
            ApiError::not_found("user")
        })?;

    let token = create_token(record.id).map_err(|e| {
        tracing::error!("failed to create token: {e:?}");
        ApiError::internal("token generation failed")
    })?;

    Ok(Json(AuthUserResponse {
        user: AuthUserData::from_record(record, token),
    }))
}

/// `GET /api/user` - fetch the authenticated user
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - token refers to a user that no longer exists
pub async fn current_user(
    State(pool): State<PgPool>,
    auth: AuthUser,
) -> Result<Json<UserDataResponse>, ApiError> {
    let record = repo::get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Json(UserDataResponse {
        user: UserData::from_record(record),
    }))
}

/// `PUT /api/user` - update email, bio and image
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `422` - blank or malformed email
/// * `409` - email already in use by another account
/// * `404` - token refers to a user that no longer exists
pub async fn update_user(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let data = request.user;
    validate_update(&data)?;

    let record = repo::update_user(
        &pool,
        auth.user_id,
        &data.email,
        data.bio.as_deref(),
        data.image.as_deref(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::conflict("a user with this email already exists")
        } else {
            ApiError::from(e)
        }
    })?
    .ok_or_else(|| ApiError::not_found("user"))?;

    tracing::info!("user updated: {}", record.username);

    Ok(Json(UserDataResponse {
        user: UserData::from_record(record),
    }))
}
