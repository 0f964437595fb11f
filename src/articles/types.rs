/**
 * Article Handler Types
 *
 * Request and response envelopes for the article endpoints, camelCased
 * per the RealWorld API shape.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::articles::repo::ArticleRecord;
use crate::profiles::types::Profile;

/// Article payload with viewer-relative flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Whether the current user has favorited this article
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: Profile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleArticlesResponse {
    pub articles: Vec<Article>,
    /// Total matching rows, ignoring limit/offset
    pub articles_count: i64,
}

/// `POST /api/articles` request payload
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleData {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateArticleRequest {
    pub article: CreateArticleData,
}

/// `PUT /api/articles/{slug}` request payload; absent fields stay
/// unchanged, a new title regenerates the slug
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateArticleRequest {
    pub article: UpdateArticleData,
}

/// `GET /api/articles` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    /// Username whose favorites to list
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /api/articles/feed` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Article {
    pub fn from_record(record: ArticleRecord) -> Self {
        Self {
            slug: record.slug,
            title: record.title,
            description: record.description,
            body: record.body,
            tag_list: record.tag_list,
            created_at: record.created_at,
            updated_at: record.updated_at,
            favorited: record.favorited,
            favorites_count: record.favorites_count,
            author: Profile {
                username: record.author_username,
                bio: record.author_bio,
                image: record.author_image,
                following: record.author_following,
            },
        }
    }
}
