/// Database connection pool management
///
/// Builds the PostgreSQL connection pool used by every handler and
/// verifies connectivity before the server starts accepting traffic.

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info};

/// Timeout for acquiring a connection from the pool.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates and initializes a PostgreSQL connection pool
///
/// This function:
/// 1. Creates a pool with the configured size
/// 2. Performs a ping to verify database connectivity
/// 3. Returns an error if the database is unreachable
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be
/// reached, or the startup ping fails.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url)
        .await?;

    ping(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Pings the database over a pooled connection
///
/// Executes a trivial query to verify the store is reachable and
/// responding. Used at startup and by the readiness endpoint.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Pinging database");

    let (value,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if value == 1 {
        Ok(())
    } else {
        Err(sqlx::Error::Protocol(
            "Ping returned unexpected value".into(),
        ))
    }
}
