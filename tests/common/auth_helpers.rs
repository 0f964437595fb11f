//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and building Authorization headers.

use sqlx::PgPool;
use uuid::Uuid;

use conduit::auth::password::hash_password;
use conduit::auth::tokens::create_token;
use conduit::users::repo::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user directly in the database
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hash_password(password).expect("failed to hash test password");

    let record = create_user(pool, username, email, &password_hash)
        .await
        .expect("failed to insert test user")
        .expect("test username already taken");

    let token = create_token(record.id).expect("failed to create test token");

    TestUser {
        id: record.id,
        username: record.username,
        email: record.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Token {token}")
}
