/**
 * Tag Handlers
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::tags::repo;

#[derive(Debug, Serialize, Deserialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// `GET /api/tags` - list every tag in use
pub async fn list_tags(State(pool): State<PgPool>) -> Result<Json<TagsResponse>, ApiError> {
    let tags = repo::list_tags(&pool).await?;
    Ok(Json(TagsResponse { tags }))
}
