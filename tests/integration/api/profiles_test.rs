//! Profile API integration tests
//!
//! Profile reads and the follow/unfollow contract, including
//! idempotency.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::auth_helpers::{auth_header, create_test_user};
use crate::common::create_test_server;
use crate::common::database::TestDatabase;

#[tokio::test]
#[serial]
async fn test_get_profile_anonymous() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;

    let response = server.get("/api/profiles/anah").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["profile"]["username"], "anah");
    assert_eq!(body["profile"]["following"], false);
}

#[tokio::test]
#[serial]
async fn test_get_unknown_profile_not_found() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/api/profiles/nobody").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_follow_is_idempotent_and_reflected_in_reads() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;

    // First follow
    let response = server
        .post("/api/profiles/anah/follow")
        .add_header("Authorization", auth_header(&jake.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["profile"]["following"], true);

    // Second follow is a no-op with the same result
    let response = server
        .post("/api/profiles/anah/follow")
        .add_header("Authorization", auth_header(&jake.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["profile"]["following"], true);

    // Reflected in a subsequent authenticated read
    let response = server
        .get("/api/profiles/anah")
        .add_header("Authorization", auth_header(&jake.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["profile"]["following"], true);
}

#[tokio::test]
#[serial]
async fn test_unfollow_is_idempotent() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;

    server
        .post("/api/profiles/anah/follow")
        .add_header("Authorization", auth_header(&jake.token))
        .await;

    for _ in 0..2 {
        let response = server
            .delete("/api/profiles/anah/follow")
            .add_header("Authorization", auth_header(&jake.token))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["profile"]["following"], false);
    }
}

#[tokio::test]
#[serial]
async fn test_follow_self_unprocessable() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;

    let response = server
        .post("/api/profiles/jake/follow")
        .add_header("Authorization", auth_header(&jake.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[serial]
async fn test_follow_requires_auth() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;

    let response = server.post("/api/profiles/anah/follow").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
