/**
 * Article Database Operations
 *
 * Row type and SQL for articles and favorites. Listing goes through the
 * dynamic query in `query.rs`; single-article reads use a fixed statement
 * with the same column set.
 */

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::articles::query::{build_count_query, build_list_query, ArticleFilter};

/// Article row joined with its author and the viewer-relative flags
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_bio: Option<String>,
    pub author_image: Option<String>,
    pub favorites_count: i64,
    pub favorited: bool,
    pub author_following: bool,
}

/// Fixed-statement variant of the listing SELECT, scoped to one slug
const SELECT_ARTICLE_BY_SLUG: &str = r#"
    SELECT
        a.id,
        a.slug,
        a.title,
        a.description,
        a.body,
        a.tag_list,
        a.created_at,
        a.updated_at,
        u.username AS author_username,
        u.bio AS author_bio,
        u.image AS author_image,
        (
            SELECT COUNT(*) FROM article_favorites f
            WHERE f.article_id = a.id
        ) AS favorites_count,
        EXISTS(
            SELECT 1 FROM article_favorites f
            WHERE f.article_id = a.id AND f.user_id = $1
        ) AS favorited,
        EXISTS(
            SELECT 1 FROM user_follows uf
            WHERE uf.user_id = $1 AND uf.following_user_id = u.id
        ) AS author_following
    FROM articles a
    JOIN users u ON u.id = a.author_id
    WHERE a.slug = $2
"#;

/// List articles with filters and pagination, plus the unpaginated total
///
/// # Arguments
/// * `pool` - Connection pool (two read statements)
/// * `viewer` - Current user, if authenticated
/// * `filter` - Active filters and pagination
///
/// # Returns
/// `(rows, total_count)` with rows ordered newest-first
pub async fn list_articles(
    pool: &PgPool,
    viewer: Option<Uuid>,
    filter: &ArticleFilter,
) -> Result<(Vec<ArticleRecord>, i64), sqlx::Error> {
    let rows = build_list_query(viewer, filter)
        .build_query_as::<ArticleRecord>()
        .fetch_all(pool)
        .await?;

    let total = build_count_query(filter)
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await?;

    Ok((rows, total))
}

/// Fetch one article by slug
pub async fn get_article_by_slug(
    executor: impl PgExecutor<'_>,
    slug: &str,
    viewer: Option<Uuid>,
) -> Result<Option<ArticleRecord>, sqlx::Error> {
    sqlx::query_as::<_, ArticleRecord>(SELECT_ARTICLE_BY_SLUG)
        .bind(viewer)
        .bind(slug)
        .fetch_optional(executor)
        .await
}

/// Resolve a slug to its article ID
pub async fn article_id_by_slug(
    executor: impl PgExecutor<'_>,
    slug: &str,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM articles WHERE slug = $1")
        .bind(slug)
        .fetch_optional(executor)
        .await
}

/// Insert a new article
pub async fn insert_article(
    executor: impl PgExecutor<'_>,
    author_id: Uuid,
    slug: &str,
    title: &str,
    description: &str,
    body: &str,
    tag_list: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO articles (id, author_id, slug, title, description, body, tag_list)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(author_id)
    .bind(slug)
    .bind(title)
    .bind(description)
    .bind(body)
    .bind(tag_list)
    .execute(executor)
    .await?;

    Ok(())
}

/// Update an article's present fields, scoped to its author
///
/// The SET clause is assembled from the fields actually provided;
/// `updated_at` always moves. Scoping the WHERE clause by `author_id`
/// makes "not yours" indistinguishable from "does not exist" (zero rows).
///
/// # Returns
/// Number of rows updated (0 or 1)
pub async fn update_article(
    executor: impl PgExecutor<'_>,
    slug: &str,
    author_id: Uuid,
    new_slug: Option<&str>,
    title: Option<&str>,
    description: Option<&str>,
    body: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let mut qb: QueryBuilder<'static, Postgres> =
        QueryBuilder::new("UPDATE articles SET updated_at = now()");

    if let Some(new_slug) = new_slug {
        qb.push(", slug = ");
        qb.push_bind(new_slug.to_string());
    }
    if let Some(title) = title {
        qb.push(", title = ");
        qb.push_bind(title.to_string());
    }
    if let Some(description) = description {
        qb.push(", description = ");
        qb.push_bind(description.to_string());
    }
    if let Some(body) = body {
        qb.push(", body = ");
        qb.push_bind(body.to_string());
    }

    qb.push(" WHERE slug = ");
    qb.push_bind(slug.to_string());
    qb.push(" AND author_id = ");
    qb.push_bind(author_id);

    let result = qb.build().execute(executor).await?;
    Ok(result.rows_affected())
}

/// Delete an article, scoped to its author
///
/// Comments and favorites go with it via `ON DELETE CASCADE`.
///
/// # Returns
/// Number of rows deleted (0 or 1)
pub async fn delete_article(
    executor: impl PgExecutor<'_>,
    slug: &str,
    author_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE slug = $1 AND author_id = $2")
        .bind(slug)
        .bind(author_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// Favorite an article by slug (idempotent)
pub async fn favorite_article(
    executor: impl PgExecutor<'_>,
    slug: &str,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO article_favorites (user_id, article_id)
        SELECT $1, a.id
        FROM articles a
        WHERE a.slug = $2
        ON CONFLICT (article_id, user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(slug)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Remove a favorite by slug (idempotent)
pub async fn unfavorite_article(
    executor: impl PgExecutor<'_>,
    slug: &str,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM article_favorites
        WHERE user_id = $1
        AND article_id = (SELECT id FROM articles WHERE slug = $2)
        "#,
    )
    .bind(user_id)
    .bind(slug)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
