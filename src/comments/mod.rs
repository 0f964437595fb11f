//! Comments on articles.
//!
//! Routes:
//! - `POST /api/articles/{slug}/comments` - add a comment
//! - `GET /api/articles/{slug}/comments` - list comments
//! - `DELETE /api/articles/{slug}/comments/{id}` - delete own comment

pub mod handlers;
pub mod repo;
pub mod types;

pub use handlers::{create_comment, delete_comment, list_comments};
