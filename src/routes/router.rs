/**
 * Router Configuration
 *
 * This module builds the single Axum router for the application: the
 * `/api` routes, request tracing, and a JSON 404 fallback.
 */

use axum::{http::StatusCode, Json, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "not found", "status": 404 })),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
