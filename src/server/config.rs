/**
 * Server Configuration
 *
 * This module loads server configuration from the environment and
 * initializes the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET`   - token signing secret (read in `auth::tokens`, falls
 *   back to a development default with a warning)
 * - `SERVER_PORT`  - HTTP listen port (default 3000)
 * - `RUST_LOG`     - tracing filter (default "info")
 */

use sqlx::PgPool;

/// Read the HTTP listen port from the environment
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

/// Connect to PostgreSQL and run pending migrations
///
/// Unlike optional services, the database is load-bearing for every
/// endpoint, so a missing `DATABASE_URL` or failed connection aborts
/// startup.
///
/// # Returns
///
/// A ready connection pool with the schema migrated to the latest version
pub async fn connect_database() -> Result<PgPool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL is not set".into()))?;

    tracing::info!("connecting to database");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("database connection pool created");

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("failed to run database migrations: {e:?}");
        sqlx::Error::Migrate(Box::new(e))
    })?;
    tracing::info!("database migrations completed");

    Ok(pool)
}
