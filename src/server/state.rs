/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * The only shared resource is the sqlx connection pool, which is an `Arc`
 * internally and cheap to clone. There is no other in-process mutable
 * state; everything durable lives in PostgreSQL.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

/// Allow handlers to extract the pool directly with `State(pool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
