/**
 * Server Initialization
 *
 * This module assembles the Axum application: connect and migrate the
 * database, build the shared state, and configure the router.
 *
 * `create_app` is split from `create_router` so integration tests can
 * build the full application against their own pool.
 */

use axum::Router;
use sqlx::PgPool;

use crate::routes::router::create_router;
use crate::server::config::connect_database;
use crate::server::state::AppState;

/// Build the application router on top of an existing pool
///
/// # Arguments
///
/// * `db_pool` - connected (and migrated) PostgreSQL pool
pub fn create_app(db_pool: PgPool) -> Router<()> {
    let app_state = AppState::new(db_pool);
    create_router(app_state)
}

/// Connect to the database and build the application router
///
/// # Errors
///
/// Fails when `DATABASE_URL` is missing, the connection cannot be
/// established, or migrations fail. The server does not start without a
/// database.
pub async fn create_app_from_env() -> Result<Router<()>, sqlx::Error> {
    tracing::info!("initializing conduit server");
    let db_pool = connect_database().await?;
    Ok(create_app(db_pool))
}
