/// Startup schema management
///
/// The service owns a single table and creates it idempotently at
/// startup instead of carrying a versioned migration history.

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";

/// Ensures the `users` table exists
///
/// Safe to run on every start; the statement is a no-op once the table
/// is in place.
///
/// # Errors
///
/// Returns an error if the statement fails to execute, which should
/// terminate startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    info!("Database schema is up to date");
    Ok(())
}
