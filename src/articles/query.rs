/**
 * Article Query Construction
 *
 * The listing endpoints compose optional filters (tag, author,
 * favorited-by, feed-by-follow) into one dynamic SQL statement with
 * pagination. Every returned row also carries three viewer-relative
 * correlated subqueries: favorites count, is-favorited, and
 * is-author-followed.
 *
 * All user input goes through bind parameters; filter composition only
 * ever concatenates fixed SQL fragments.
 */

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// Default page size for listing endpoints
pub const DEFAULT_LIMIT: i64 = 20;

/// Optional filters and pagination for article listings
///
/// `feed_of` is set only by the feed endpoint; the public listing uses
/// the other three filters. All filters combine with AND.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    /// Only articles carrying this tag
    pub tag: Option<String>,
    /// Only articles authored by this username
    pub author: Option<String>,
    /// Only articles favorited by this username
    pub favorited_by: Option<String>,
    /// Only articles authored by users this user follows
    pub feed_of: Option<Uuid>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            tag: None,
            author: None,
            favorited_by: None,
            feed_of: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Push the shared SELECT head: article columns, the joined author, and
/// the three viewer-relative subqueries. A NULL viewer makes both EXISTS
/// checks false.
fn push_article_select(qb: &mut QueryBuilder<'static, Postgres>, viewer: Option<Uuid>) {
    qb.push(
        r#"SELECT
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
                WHERE f.article_id = a.id AND f.user_id = "#,
    );
    qb.push_bind(viewer);
    qb.push(
        r#"
            ) AS favorited,
            EXISTS(
                SELECT 1 FROM user_follows uf
                WHERE uf.user_id = "#,
    );
    qb.push_bind(viewer);
    qb.push(
        r#" AND uf.following_user_id = u.id
            ) AS author_following
        FROM articles a
        JOIN users u ON u.id = a.author_id"#,
    );
}

/// Push the WHERE clause for the active filters, ANDed in a fixed order
fn push_conditions(qb: &mut QueryBuilder<'static, Postgres>, filter: &ArticleFilter) {
    let mut prefix = " WHERE ";

    if let Some(tag) = &filter.tag {
        qb.push(prefix);
        qb.push_bind(tag.clone());
        qb.push(" = ANY(a.tag_list)");
        prefix = " AND ";
    }

    if let Some(author) = &filter.author {
        qb.push(prefix);
        qb.push("u.username = ");
        qb.push_bind(author.clone());
        prefix = " AND ";
    }

    if let Some(favorited_by) = &filter.favorited_by {
        qb.push(prefix);
        qb.push(
            "a.id IN (SELECT af.article_id FROM article_favorites af \
             JOIN users fu ON fu.id = af.user_id WHERE fu.username = ",
        );
        qb.push_bind(favorited_by.clone());
        qb.push(")");
        prefix = " AND ";
    }

    if let Some(feed_of) = filter.feed_of {
        qb.push(prefix);
        qb.push(
            "a.author_id IN (SELECT uf.following_user_id FROM user_follows uf \
             WHERE uf.user_id = ",
        );
        qb.push_bind(feed_of);
        qb.push(")");
    }
}

/// Build the listing query: filters, newest-first ordering, pagination
pub fn build_list_query(
    viewer: Option<Uuid>,
    filter: &ArticleFilter,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("");
    push_article_select(&mut qb, viewer);
    push_conditions(&mut qb, filter);
    qb.push(" ORDER BY a.created_at DESC LIMIT ");
    qb.push_bind(filter.limit);
    qb.push(" OFFSET ");
    qb.push_bind(filter.offset);
    qb
}

/// Build the matching-row count for the same filters, ignoring pagination
pub fn build_count_query(filter: &ArticleFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb =
        QueryBuilder::new("SELECT COUNT(*) FROM articles a JOIN users u ON u.id = a.author_id");
    push_conditions(&mut qb, filter);
    qb
}
