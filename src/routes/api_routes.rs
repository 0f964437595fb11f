/**
 * API Route Handlers
 *
 * This module wires every `/api` endpoint to its handler.
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users` - register
 * - `POST /api/users/login` - login
 * - `GET /api/user` - current user (auth)
 * - `PUT /api/user` - update current user (auth)
 *
 * ## Profiles
 * - `GET /api/profiles/{username}` - fetch profile (optional auth)
 * - `POST /api/profiles/{username}/follow` - follow (auth)
 * - `DELETE /api/profiles/{username}/follow` - unfollow (auth)
 *
 * ## Articles
 * - `GET /api/articles` - list (optional auth)
 * - `GET /api/articles/feed` - follow feed (auth)
 * - `GET /api/articles/{slug}` - fetch (optional auth)
 * - `POST /api/articles` - create (auth)
 * - `PUT /api/articles/{slug}` - update (auth, author only)
 * - `DELETE /api/articles/{slug}` - delete (auth, author only)
 * - `POST /api/articles/{slug}/favorite` - favorite (auth)
 * - `DELETE /api/articles/{slug}/favorite` - unfavorite (auth)
 *
 * ## Comments
 * - `POST /api/articles/{slug}/comments` - add (auth)
 * - `GET /api/articles/{slug}/comments` - list (optional auth)
 * - `DELETE /api/articles/{slug}/comments/{id}` - delete own (auth)
 *
 * ## Tags
 * - `GET /api/tags` - list tags
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::articles;
use crate::comments;
use crate::profiles;
use crate::server::state::AppState;
use crate::tags;
use crate::users;

/// Configure all `/api` routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Users
        .route("/api/users", post(users::register))
        .route("/api/users/login", post(users::login))
        .route(
            "/api/user",
            get(users::current_user).put(users::update_user),
        )
        // Profiles
        .route("/api/profiles/{username}", get(profiles::get_profile))
        .route(
            "/api/profiles/{username}/follow",
            post(profiles::follow_profile).delete(profiles::unfollow_profile),
        )
        // Articles
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/feed", get(articles::feed_articles))
        .route(
            "/api/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{slug}/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        // Comments
        .route(
            "/api/articles/{slug}/comments",
            post(comments::create_comment).get(comments::list_comments),
        )
        .route(
            "/api/articles/{slug}/comments/{id}",
            axum::routing::delete(comments::delete_comment),
        )
        // Tags
        .route("/api/tags", get(tags::list_tags))
}
