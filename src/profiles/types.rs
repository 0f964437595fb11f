/**
 * Profile Types
 *
 * The profile payload is shared across the API: profile endpoints return
 * it directly, and articles and comments embed it as `author`.
 */

use serde::{Deserialize, Serialize};

use crate::profiles::repo::ProfileRecord;

/// Public view of a user, relative to the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// Whether the current user follows this profile; false for anonymous
    /// viewers
    pub following: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

impl Profile {
    pub fn from_record(record: ProfileRecord) -> Self {
        Self {
            username: record.username,
            bio: record.bio,
            image: record.image,
            following: record.following,
        }
    }
}
