//! Comment API integration tests

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::auth_helpers::{auth_header, create_test_user, TestUser};
use crate::common::create_test_server;
use crate::common::database::TestDatabase;

/// Create an article through the API and return its slug
async fn create_article_slug(server: &TestServer, author: &TestUser) -> String {
    let response = server
        .post("/api/articles")
        .add_header("Authorization", auth_header(&author.token))
        .json(&serde_json::json!({
            "article": {
                "title": "Commentable post",
                "description": "a post",
                "body": "body"
            }
        }))
        .await;

    let body: serde_json::Value = response.json();
    body["article"]["slug"].as_str().unwrap().to_string()
}

#[tokio::test]
#[serial]
async fn test_create_and_list_comment() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    let anah = create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;
    let slug = create_article_slug(&server, &jake).await;

    let response = server
        .post(&format!("/api/articles/{slug}/comments"))
        .add_header("Authorization", auth_header(&anah.token))
        .json(&serde_json::json!({ "comment": { "body": "Great post!" } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["comment"]["body"], "Great post!");
    assert_eq!(body["comment"]["author"]["username"], "anah");
    assert!(body["comment"]["id"].as_str().is_some());

    let response = server.get(&format!("/api/articles/{slug}/comments")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["comments"].as_array().unwrap().len(), 1);
    assert_eq!(body["comments"][0]["body"], "Great post!");
}

#[tokio::test]
#[serial]
async fn test_comments_are_newest_first() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    let slug = create_article_slug(&server, &jake).await;

    for text in ["first", "second"] {
        server
            .post(&format!("/api/articles/{slug}/comments"))
            .add_header("Authorization", auth_header(&jake.token))
            .json(&serde_json::json!({ "comment": { "body": text } }))
            .await;
    }

    let response = server.get(&format!("/api/articles/{slug}/comments")).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["comments"][0]["body"], "second");
    assert_eq!(body["comments"][1]["body"], "first");
}

#[tokio::test]
#[serial]
async fn test_comment_on_unknown_article_not_found() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;

    let response = server
        .post("/api/articles/no-such-slug/comments")
        .add_header("Authorization", auth_header(&jake.token))
        .json(&serde_json::json!({ "comment": { "body": "hello?" } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.get("/api/articles/no-such-slug/comments").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_blank_comment_unprocessable() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    let slug = create_article_slug(&server, &jake).await;

    let response = server
        .post(&format!("/api/articles/{slug}/comments"))
        .add_header("Authorization", auth_header(&jake.token))
        .json(&serde_json::json!({ "comment": { "body": "  " } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[serial]
async fn test_delete_own_comment_only() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;
    let anah = create_test_user(db.pool(), "anah", "anah@example.com", "password123").await;
    let slug = create_article_slug(&server, &jake).await;

    let response = server
        .post(&format!("/api/articles/{slug}/comments"))
        .add_header("Authorization", auth_header(&anah.token))
        .json(&serde_json::json!({ "comment": { "body": "mine" } }))
        .await;
    let body: serde_json::Value = response.json();
    let comment_id = body["comment"]["id"].as_str().unwrap().to_string();

    // The author of the article still can't delete someone else's comment
    let response = server
        .delete(&format!("/api/articles/{slug}/comments/{comment_id}"))
        .add_header("Authorization", auth_header(&jake.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/api/articles/{slug}/comments/{comment_id}"))
        .add_header("Authorization", auth_header(&anah.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get(&format!("/api/articles/{slug}/comments")).await;
    let body: serde_json::Value = response.json();
    assert!(body["comments"].as_array().unwrap().is_empty());
}
