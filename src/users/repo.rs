/**
 * User Database Operations
 *
 * This module handles user rows and the SQL that touches them. All
 * statements are parameterized; handlers never see SQL text.
 */

use chrono::{DateTime, Utc};
use sqlx::PgExecutor;
use uuid::Uuid;

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str = "id, username, email, password_hash, bio, image, created_at, updated_at";

/// Create a new user
///
/// Uses `ON CONFLICT (username) DO NOTHING`, so a duplicate username comes
/// back as `None` rather than an error. A duplicate email still surfaces
/// as a unique-violation error from the email constraint.
///
/// # Arguments
/// * `executor` - Pool or transaction
/// * `username` - Chosen username
/// * `email` - Email address
/// * `password_hash` - Hashed password
///
/// # Returns
/// The created user, or `None` when the username is taken
pub async fn create_user(
    executor: impl PgExecutor<'_>,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        INSERT INTO users (id, username, email, password_hash)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (username) DO NOTHING
        RETURNING id, username, email, password_hash, bio, image, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(executor)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Get user by email (login lookup)
pub async fn get_user_by_email(
    executor: impl PgExecutor<'_>,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(executor)
    .await
}

/// Update a user's email, bio and image
///
/// # Returns
/// The updated user, or `None` when the ID does not exist
pub async fn update_user(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    email: &str,
    bio: Option<&str>,
    image: Option<&str>,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        UPDATE users
        SET email = $1, bio = $2, image = $3, updated_at = now()
        WHERE id = $4
        RETURNING id, username, email, password_hash, bio, image, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(bio)
    .bind(image)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}
