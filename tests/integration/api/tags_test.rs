//! Tag API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::auth_helpers::{auth_header, create_test_user};
use crate::common::create_test_server;
use crate::common::database::TestDatabase;

#[tokio::test]
#[serial]
async fn test_tags_empty_without_articles() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/api/tags").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_tags_are_deduplicated_and_sorted() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let jake = create_test_user(db.pool(), "jake", "jake@jake.jake", "password123").await;

    for (title, tags) in [
        ("Post one", vec!["rust", "web"]),
        ("Post two", vec!["rust", "database"]),
    ] {
        server
            .post("/api/articles")
            .add_header("Authorization", auth_header(&jake.token))
            .json(&serde_json::json!({
                "article": {
                    "title": title,
                    "description": "d",
                    "body": "b",
                    "tagList": tags
                }
            }))
            .await;
    }

    let response = server.get("/api/tags").await;
    let body: serde_json::Value = response.json();

    assert_eq!(
        body["tags"],
        serde_json::json!(["database", "rust", "web"])
    );
}
