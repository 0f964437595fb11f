/**
 * Comment Database Operations
 */

use chrono::{DateTime, Utc};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Comment row joined with its author and the viewer-relative following
/// flag
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_bio: Option<String>,
    pub author_image: Option<String>,
    pub author_following: bool,
}

/// Insert a comment, resolving the article by slug inline
///
/// # Returns
/// The new comment's ID and timestamps, or `None` when the slug does not
/// exist (the INSERT..SELECT matches zero rows)
pub async fn insert_comment(
    executor: impl PgExecutor<'_>,
    slug: &str,
    commenter: Uuid,
    body: &str,
) -> Result<Option<(Uuid, DateTime<Utc>, DateTime<Utc>)>, sqlx::Error> {
    let row = sqlx::query_as::<_, (Uuid, DateTime<Utc>, DateTime<Utc>)>(
        r#"
        INSERT INTO article_comments (id, article_id, commenter_user_id, body)
        SELECT $1, a.id, $2, $3
        FROM articles a
        WHERE a.slug = $4
        RETURNING id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(commenter)
    .bind(body)
    .bind(slug)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// List an article's comments, newest first
pub async fn list_comments(
    executor: impl PgExecutor<'_>,
    article_id: Uuid,
    viewer: Option<Uuid>,
) -> Result<Vec<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(
        r#"
        SELECT
            ac.id,
            ac.body,
            ac.created_at,
            ac.updated_at,
            u.username AS author_username,
            u.bio AS author_bio,
            u.image AS author_image,
            EXISTS(
                SELECT 1 FROM user_follows uf
                WHERE uf.user_id = $2 AND uf.following_user_id = u.id
            ) AS author_following
        FROM article_comments ac
        JOIN users u ON u.id = ac.commenter_user_id
        WHERE ac.article_id = $1
        ORDER BY ac.created_at DESC
        "#,
    )
    .bind(article_id)
    .bind(viewer)
    .fetch_all(executor)
    .await
}

/// Delete a comment, scoped to the commenter and the article slug
///
/// # Returns
/// Number of rows deleted (0 or 1)
pub async fn delete_comment(
    executor: impl PgExecutor<'_>,
    slug: &str,
    comment_id: Uuid,
    commenter: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM article_comments
        WHERE id = $1
        AND article_id = (SELECT id FROM articles WHERE slug = $2)
        AND commenter_user_id = $3
        "#,
    )
    .bind(comment_id)
    .bind(slug)
    .bind(commenter)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
