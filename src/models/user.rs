/// User model and database operations
///
/// The `users` table is the only entity this service owns. The store
/// assigns ids; `name` and `email` are free-form text.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     name TEXT,
///     email TEXT
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// User record as stored and served
///
/// The columns are nullable at the store level but decoded as non-null
/// strings here; a NULL row fails decoding and is handled by the
/// caller (listing skips it, point lookups surface the error).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned identifier, immutable after creation
    pub id: i32,

    /// Display name, no constraints enforced by the service
    pub name: String,

    /// Email address, no format validation by the service
    pub email: String,
}

/// Input for creating a new user
///
/// The id is always store-assigned; clients cannot supply one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl User {
    /// Inserts a new user and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the connection is lost.
    pub async fn create(pool: &PgPool, data: NewUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(data.name)
        .bind(data.email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    ///
    /// Returns `None` when no row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Fetches every user row, decoding each row independently
    ///
    /// Returns one entry per stored row. Rows that fail to decode (for
    /// example a NULL name) come back as errors so the caller can skip
    /// them without failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the query itself fails; per-row decode
    /// failures are reported inside the vector.
    pub async fn list(pool: &PgPool) -> Result<Vec<Result<Self, sqlx::Error>>, sqlx::Error> {
        let rows: Vec<PgRow> = sqlx::query("SELECT id, name, email FROM users")
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    /// Overwrites name and email for the given id
    ///
    /// This is a blind write: the number of affected rows is not
    /// inspected. Callers that need the canonical stored value read it
    /// back separately.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to execute.
    pub async fn update(pool: &PgPool, id: i32, data: NewUser) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(data.name)
            .bind(data.email)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Deletes a user by id
    ///
    /// Returns true if a row was deleted, false if no row matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to execute.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
