/// Common test utilities for integration tests
///
/// Provides a `TestContext` that builds the full router two ways:
///
/// - [`TestContext::offline`]: a lazily-connected pool pointing at an
///   unreachable address. Nothing connects until a handler touches the
///   store, so middleware, liveness, decode failures, and
///   store-unreachable paths can all be exercised without PostgreSQL.
/// - [`TestContext::new`]: a real pool from `DATABASE_URL` with the
///   schema ensured, for the CRUD round-trip tests (marked `#[ignore]`
///   so they only run where a database is available).

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use user_api::app::{build_router, AppState};
use user_api::config::{ApiConfig, Config, DatabaseConfig};

/// Test context containing the pool and the assembled router
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

fn test_config(url: &str) -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: url.to_string(),
            max_connections: 5,
        },
    }
}

impl TestContext {
    /// Creates a context backed by a real database from `DATABASE_URL`
    pub async fn new() -> anyhow::Result<Self> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for database-backed tests"))?;

        let db = PgPool::connect(&url).await?;
        user_api::db::schema::ensure_schema(&db).await?;

        let state = AppState::new(db.clone(), test_config(&url));
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Creates a context whose pool points at an unreachable address
    pub fn offline() -> Self {
        let url = "postgresql://127.0.0.1:1/unreachable";

        let db = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(url)
            .expect("lazy pool construction does not touch the network");

        let state = AppState::new(db.clone(), test_config(url));
        let app = build_router(state);

        TestContext { db, app }
    }
}
