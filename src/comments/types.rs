/**
 * Comment Handler Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comments::repo::CommentRecord;
use crate::profiles::types::Profile;

/// Comment payload with its author's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: Profile,
}

/// `POST /api/articles/{slug}/comments` request payload
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCommentData {
    pub body: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCommentRequest {
    pub comment: CreateCommentData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleCommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MultipleCommentsResponse {
    pub comments: Vec<Comment>,
}

impl Comment {
    pub fn from_record(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            body: record.body,
            author: Profile {
                username: record.author_username,
                bio: record.author_bio,
                image: record.author_image,
                following: record.author_following,
            },
        }
    }
}
