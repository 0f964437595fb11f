/**
 * Comment Handlers
 *
 * Add, list and delete comments on an article. The commenting user's own
 * profile is embedded in the create response with `following` false (a
 * user cannot follow themselves).
 */

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::articles::repo::article_id_by_slug;
use crate::comments::repo;
use crate::comments::types::{
    Comment, CreateCommentRequest, MultipleCommentsResponse, SingleCommentResponse,
};
use crate::error::ApiError;
use crate::middleware::{AuthUser, OptionalAuthUser};
use crate::profiles::types::Profile;
use crate::users::repo::get_user_by_id;

/// `POST /api/articles/{slug}/comments` - add a comment
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `422` - blank body
/// * `404` - unknown article slug
pub async fn create_comment(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<SingleCommentResponse>, ApiError> {
    let body = request.comment.body;
    if body.trim().is_empty() {
        return Err(ApiError::validation("body", "can't be blank"));
    }

    let mut tx = pool.begin().await?;

    let (id, created_at, updated_at) = repo::insert_comment(&mut *tx, &slug, auth.user_id, &body)
        .await?
        .ok_or_else(|| ApiError::not_found("article"))?;

    let commenter = get_user_by_id(&mut *tx, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    tx.commit().await?;
    tracing::info!("comment {id} added to {slug}");

    Ok(Json(SingleCommentResponse {
        comment: Comment {
            id,
            created_at,
            updated_at,
            body,
            author: Profile {
                username: commenter.username,
                bio: commenter.bio,
                image: commenter.image,
                following: false,
            },
        },
    }))
}

/// `GET /api/articles/{slug}/comments` - list an article's comments
///
/// Authentication is optional; it only affects the `following` flag on
/// each comment's author.
///
/// # Errors
///
/// * `404` - unknown article slug
pub async fn list_comments(
    State(pool): State<PgPool>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> Result<Json<MultipleCommentsResponse>, ApiError> {
    // An article with no comments is an empty list, not a 404.
    let article_id = article_id_by_slug(&pool, &slug)
        .await?
        .ok_or_else(|| ApiError::not_found("article"))?;

    let records = repo::list_comments(&pool, article_id, auth.user_id()).await?;

    Ok(Json(MultipleCommentsResponse {
        comments: records.into_iter().map(Comment::from_record).collect(),
    }))
}

/// `DELETE /api/articles/{slug}/comments/{id}` - delete own comment
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404` - unknown slug/comment, or the comment belongs to someone else
pub async fn delete_comment(
    State(pool): State<PgPool>,
    auth: AuthUser,
    Path((slug, comment_id)): Path<(String, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = repo::delete_comment(&pool, &slug, comment_id, auth.user_id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("comment"));
    }

    tracing::info!("comment {comment_id} deleted from {slug}");
    Ok(Json(serde_json::json!({ "message": "comment deleted" })))
}
