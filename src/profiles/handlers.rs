/**
 * Profile Handlers
 *
 * Get, follow and unfollow profiles. Follow and unfollow run inside one
 * transaction so the mutation and the refreshed profile read commit (or
 * roll back) together.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::error::types::is_check_violation;
use crate::error::ApiError;
use crate::middleware::{AuthUser, OptionalAuthUser};
use crate::profiles::repo;
use crate::profiles::types::{Profile, ProfileResponse};

/// `GET /api/profiles/{username}` - fetch a profile
///
/// Authentication is optional; the `following` flag is false for
/// anonymous viewers.
///
/// # Errors
///
/// * `404` - unknown username
pub async fn get_profile(
    State(pool): State<PgPool>,
    auth: OptionalAuthUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let record = repo::get_profile(&pool, &username, auth.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("profile"))?;

    Ok(Json(ProfileResponse {
        profile: Profile::from_record(record),
    }))
}

/// `POST /api/profiles/{username}/follow` - follow a user
///
/// Idempotent: following an already-followed user is a no-op that still
/// returns the profile.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown username
/// * `422` - attempting to follow yourself
pub async fn follow_profile(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let mut tx = pool.begin().await?;

    repo::follow_user(&mut *tx, auth.user_id, &username)
        .await
        .map_err(|e| {
            if is_check_violation(&e) {
                ApiError::validation("username", "can't follow yourself")
            } else {
                ApiError::from(e)
            }
        })?;

    let record = repo::get_profile(&mut *tx, &username, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("profile"))?;

    tx.commit().await?;
    tracing::info!("user {} now follows {}", auth.user_id, username);

    Ok(Json(ProfileResponse {
        profile: Profile::from_record(record),
    }))
}

/// `DELETE /api/profiles/{username}/follow` - unfollow a user
///
/// Idempotent: unfollowing a user who was never followed still returns
/// the profile.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown username
pub async fn unfollow_profile(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let mut tx = pool.begin().await?;

    repo::unfollow_user(&mut *tx, auth.user_id, &username).await?;

    let record = repo::get_profile(&mut *tx, &username, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("profile"))?;

    tx.commit().await?;
    tracing::info!("user {} unfollowed {}", auth.user_id, username);

    Ok(Json(ProfileResponse {
        profile: Profile::from_record(record),
    }))
}
