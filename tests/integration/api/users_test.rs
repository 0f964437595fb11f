//! User API integration tests
//!
//! Registration, login, current-user and update-user contracts.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::auth_helpers::{auth_header, create_test_user};
use crate::common::create_test_server;
use crate::common::database::TestDatabase;

#[tokio::test]
#[serial]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "user": {
                "username": "jake",
                "email": "jake@jake.jake",
                "password": "jakejake123"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["username"], "jake");
    assert_eq!(body["user"]["email"], "jake@jake.jake");
    assert!(body["user"]["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_username_conflict() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "jake", "jake@jake.jake", "jakejake123").await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "user": {
                "username": "jake",
                "email": "other@jake.jake",
                "password": "jakejake123"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_email_conflict() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "jake", "jake@jake.jake", "jakejake123").await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "user": {
                "username": "not_jake",
                "email": "jake@jake.jake",
                "password": "jakejake123"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn test_register_short_password_unprocessable() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "user": {
                "username": "jake",
                "email": "jake@jake.jake",
                "password": "short"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
#[serial]
async fn test_login_token_round_trip() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "jake", "jake@jake.jake", "jakejake123").await;

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({
            "user": { "email": "jake@jake.jake", "password": "jakejake123" }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["user"]["token"].as_str().unwrap().to_string();

    // The token issued at login permits access to the current-user
    // endpoint.
    let me = server
        .get("/api/user")
        .add_header("Authorization", auth_header(&token))
        .await;

    assert_eq!(me.status_code(), StatusCode::OK);
    let me_body: serde_json::Value = me.json();
    assert_eq!(me_body["user"]["email"], "jake@jake.jake");
    assert_eq!(me_body["user"]["username"], "jake");
}

#[tokio::test]
#[serial]
async fn test_login_wrong_password_not_found() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    create_test_user(db.pool(), "jake", "jake@jake.jake", "jakejake123").await;

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({
            "user": { "email": "jake@jake.jake", "password": "wrongpassword" }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_current_user_requires_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/api/user").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/user")
        .add_header("Authorization", "Token not.a.valid.jwt")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_update_user_is_reflected_in_reads() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let user = create_test_user(db.pool(), "jake", "jake@jake.jake", "jakejake123").await;

    let response = server
        .put("/api/user")
        .add_header("Authorization", auth_header(&user.token))
        .json(&serde_json::json!({
            "user": {
                "email": "jake@jake.jake",
                "bio": "I work at statefarm",
                "image": "https://i.stack.imgur.com/xHWG8.jpg"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let me = server
        .get("/api/user")
        .add_header("Authorization", auth_header(&user.token))
        .await;
    let body: serde_json::Value = me.json();
    assert_eq!(body["user"]["bio"], "I work at statefarm");
    assert_eq!(body["user"]["image"], "https://i.stack.imgur.com/xHWG8.jpg");
}
