/**
 * Profile Database Operations
 *
 * Profile reads and the follow/unfollow writes. The `following` flag is
 * computed per-viewer with a correlated EXISTS subquery; a NULL viewer
 * (anonymous request) makes it false.
 */

use sqlx::PgExecutor;
use uuid::Uuid;

/// Profile row with the viewer-relative following flag
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

/// Fetch a profile by username
///
/// # Arguments
/// * `executor` - Pool or transaction
/// * `username` - Profile to look up
/// * `viewer` - Current user, if authenticated
///
/// # Returns
/// The profile, or `None` when the username does not exist
pub async fn get_profile(
    executor: impl PgExecutor<'_>,
    username: &str,
    viewer: Option<Uuid>,
) -> Result<Option<ProfileRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRecord>(
        r#"
        SELECT
            u.username,
            u.bio,
            u.image,
            EXISTS(
                SELECT 1 FROM user_follows uf
                WHERE uf.user_id = $2 AND uf.following_user_id = u.id
            ) AS following
        FROM users u
        WHERE u.username = $1
        "#,
    )
    .bind(username)
    .bind(viewer)
    .fetch_optional(executor)
    .await
}

/// Follow a user by username (idempotent)
///
/// The insert resolves the username inline; following an unknown username
/// affects zero rows and following an already-followed user hits
/// `ON CONFLICT DO NOTHING`. A self-follow violates the table's CHECK
/// constraint and surfaces as an error for the handler to map.
pub async fn follow_user(
    executor: impl PgExecutor<'_>,
    follower: Uuid,
    username: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO user_follows (user_id, following_user_id)
        SELECT $1, u.id
        FROM users u
        WHERE u.username = $2
        ON CONFLICT (user_id, following_user_id) DO NOTHING
        "#,
    )
    .bind(follower)
    .bind(username)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Unfollow a user by username (idempotent)
pub async fn unfollow_user(
    executor: impl PgExecutor<'_>,
    follower: Uuid,
    username: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM user_follows
        WHERE user_id = $1
        AND following_user_id = (SELECT id FROM users WHERE username = $2)
        "#,
    )
    .bind(follower)
    .bind(username)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
