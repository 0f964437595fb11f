/**
 * User Handler Types
 *
 * Request and response envelopes for the user endpoints. Every payload is
 * wrapped in a `user` object, following the RealWorld API shape.
 */

use serde::{Deserialize, Serialize};

use crate::users::repo::UserRecord;

/// `POST /api/users` request payload
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterUserData {
    pub username: String,
    pub email: String,
    /// Plaintext password; hashed before storage, never persisted
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterUserRequest {
    pub user: RegisterUserData,
}

/// `POST /api/users/login` request payload
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginUserData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginUserRequest {
    pub user: LoginUserData,
}

/// `PUT /api/user` request payload
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateUserData {
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateUserRequest {
    pub user: UpdateUserData,
}

/// User payload without a token (`GET /api/user`, `PUT /api/user`)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub email: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDataResponse {
    pub user: UserData,
}

/// User payload with a fresh token (register, login)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserData {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUserResponse {
    pub user: AuthUserData,
}

impl UserData {
    pub fn from_record(record: UserRecord) -> Self {
        Self {
            email: record.email,
            username: record.username,
            bio: record.bio,
            image: record.image,
        }
    }
}

impl AuthUserData {
    pub fn from_record(record: UserRecord, token: String) -> Self {
        Self {
            email: record.email,
            token,
            username: record.username,
            bio: record.bio,
            image: record.image,
        }
    }
}
