/**
 * Article Handlers
 *
 * Listing, feed, CRUD and favorites. Write operations that touch more
 * than one statement (create, update, favorite, unfavorite) run inside a
 * transaction: the mutation and the refreshed read commit together, and
 * an error on either path rolls both back.
 */

use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::PgPool;

use crate::articles::query::{ArticleFilter, DEFAULT_LIMIT};
use crate::articles::repo;
use crate::articles::slug::generate_slug;
use crate::articles::types::{
    Article, CreateArticleData, CreateArticleRequest, FeedParams, ListArticlesParams,
    MultipleArticlesResponse, SingleArticleResponse, UpdateArticleData, UpdateArticleRequest,
};
use crate::error::{ApiError, FieldErrors};
use crate::middleware::{AuthUser, OptionalAuthUser};

fn validate_create(data: &CreateArticleData) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();

    if data.title.trim().is_empty() {
        errors.add("title", "can't be blank");
    }
    if data.description.trim().is_empty() {
        errors.add("description", "can't be blank");
    }
    if data.body.trim().is_empty() {
        errors.add("body", "can't be blank");
    }

    errors.into_result()
}

fn validate_update(data: &UpdateArticleData) -> Result<(), ApiError> {
    let mut errors = FieldErrors::new();

    for (field, value) in [
        ("title", &data.title),
        ("description", &data.description),
        ("body", &data.body),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                errors.add(field, "can't be blank");
            }
        }
    }

    errors.into_result()
}

/// `GET /api/articles` - list articles, newest first
///
/// Optional query parameters: `tag`, `author`, `favorited` (a username),
/// `limit` (default 20), `offset` (default 0). Filters combine with AND.
/// Authentication is optional and only affects the `favorited` /
/// `following` flags on the returned payloads.
pub async fn list_articles(
    State(pool): State<PgPool>,
    auth: OptionalAuthUser,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<MultipleArticlesResponse>, ApiError> {
    let filter = ArticleFilter {
        tag: params.tag,
        author: params.author,
        favorited_by: params.favorited,
        feed_of: None,
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        offset: params.offset.unwrap_or(0),
    };

    let (rows, total) = repo::list_articles(&pool, auth.user_id(), &filter).await?;

    Ok(Json(MultipleArticlesResponse {
        articles: rows.into_iter().map(Article::from_record).collect(),
        articles_count: total,
    }))
}

/// `GET /api/articles/feed` - articles by followed authors, newest first
///
/// # Errors
///
/// * `401` - missing or invalid token
pub async fn feed_articles(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Query(params): Query<FeedParams>,
) -> Result<Json<MultipleArticlesResponse>, ApiError> {
    let filter = ArticleFilter {
        feed_of: Some(auth.user_id),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        offset: params.offset.unwrap_or(0),
        ..Default::default()
    };

    let (rows, total) = repo::list_articles(&pool, Some(auth.user_id), &filter).await?;

    Ok(Json(MultipleArticlesResponse {
        articles: rows.into_iter().map(Article::from_record).collect(),
        articles_count: total,
    }))
}

/// `GET /api/articles/{slug}` - fetch one article
///
/// # Errors
///
/// * `404` - unknown slug
pub async fn get_article(
    State(pool): State<PgPool>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let record = repo::get_article_by_slug(&pool, &slug, auth.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("article"))?;

    Ok(Json(SingleArticleResponse {
        article: Article::from_record(record),
    }))
}

/// `POST /api/articles` - create an article
///
/// The slug is derived from the title plus a random uniqueness suffix.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `422` - blank title, description or body
pub async fn create_article(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let data = request.article;
    validate_create(&data)?;

    let slug = generate_slug(&data.title);

    let mut tx = pool.begin().await?;

    repo::insert_article(
        &mut *tx,
        auth.user_id,
        &slug,
        &data.title,
        &data.description,
        &data.body,
        &data.tag_list,
    )
    .await?;

    let record = repo::get_article_by_slug(&mut *tx, &slug, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::internal("created article vanished"))?;

    tx.commit().await?;
    tracing::info!("article created: {slug}");

    Ok(Json(SingleArticleResponse {
        article: Article::from_record(record),
    }))
}

/// `PUT /api/articles/{slug}` - update an article
///
/// Only the author can update; a changed title regenerates the slug and
/// the response carries the new one.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `422` - a provided field is blank
/// * `404` - unknown slug, or the article belongs to someone else
pub async fn update_article(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let data = request.article;
    validate_update(&data)?;

    let new_slug = data.title.as_deref().map(generate_slug);

    let mut tx = pool.begin().await?;

    let updated = repo::update_article(
        &mut *tx,
        &slug,
        auth.user_id,
        new_slug.as_deref(),
        data.title.as_deref(),
        data.description.as_deref(),
        data.body.as_deref(),
    )
    .await?;

    if updated == 0 {
        return Err(ApiError::not_found("article"));
    }

    let current_slug = new_slug.as_deref().unwrap_or(&slug);
    let record = repo::get_article_by_slug(&mut *tx, current_slug, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::internal("updated article vanished"))?;

    tx.commit().await?;
    tracing::info!("article updated: {slug} -> {current_slug}");

    Ok(Json(SingleArticleResponse {
        article: Article::from_record(record),
    }))
}

/// `DELETE /api/articles/{slug}` - delete an article
///
/// Only the author can delete; comments and favorites cascade.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown slug, or the article belongs to someone else
pub async fn delete_article(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repo::delete_article(&pool, &slug, auth.user_id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("article"));
    }

    tracing::info!("article deleted: {slug}");
    Ok(Json(serde_json::json!({ "message": "article deleted" })))
}

/// `POST /api/articles/{slug}/favorite` - favorite an article
///
/// Idempotent; the refreshed article (with the bumped count and the
/// `favorited` flag) comes back either way.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown slug
pub async fn favorite_article(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let mut tx = pool.begin().await?;

    repo::favorite_article(&mut *tx, &slug, auth.user_id).await?;

    let record = repo::get_article_by_slug(&mut *tx, &slug, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("article"))?;

    tx.commit().await?;

    Ok(Json(SingleArticleResponse {
        article: Article::from_record(record),
    }))
}

/// `DELETE /api/articles/{slug}/favorite` - remove a favorite
///
/// Idempotent.
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown slug
pub async fn unfavorite_article(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let mut tx = pool.begin().await?;

    repo::unfavorite_article(&mut *tx, &slug, auth.user_id).await?;

    let record = repo::get_article_by_slug(&mut *tx, &slug, Some(auth.user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("article"))?;

    tx.commit().await?;

    Ok(Json(SingleArticleResponse {
        article: Article::from_record(record),
    }))
}
