/**
 * Tag Database Operations
 *
 * Tags live denormalized as a text[] on articles; the listing unnests
 * and deduplicates them.
 */

use sqlx::PgExecutor;

/// List every distinct tag across all articles, alphabetically
pub async fn list_tags(executor: impl PgExecutor<'_>) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT UNNEST(tag_list) AS tag
        FROM articles
        ORDER BY tag
        "#,
    )
    .fetch_all(executor)
    .await
}
