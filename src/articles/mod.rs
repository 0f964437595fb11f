//! Articles: authoring, listing with filters, the follow feed, and
//! favorites.
//!
//! Routes:
//! - `GET /api/articles` - list with optional tag/author/favorited filters
//! - `GET /api/articles/feed` - articles by followed authors
//! - `GET /api/articles/{slug}` - fetch one article
//! - `POST /api/articles` - create
//! - `PUT /api/articles/{slug}` - update (author only)
//! - `DELETE /api/articles/{slug}` - delete (author only)
//! - `POST /api/articles/{slug}/favorite` - favorite
//! - `DELETE /api/articles/{slug}/favorite` - unfavorite

pub mod handlers;
pub mod query;
pub mod repo;
pub mod slug;
pub mod types;

pub use handlers::{
    create_article, delete_article, favorite_article, feed_articles, get_article, list_articles,
    unfavorite_article, update_article,
};
