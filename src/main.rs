//! # User API Server
//!
//! Minimal CRUD service over a single `users` table, fronted by Axum
//! with trace-id, CORS, and content-type middleware.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/users cargo run
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_api::{app::AppState, config::Config, db, SERVICE_NAME};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with a JSON sink
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "starting user API server"
    );

    let config = Config::from_env()?;

    // Any failure from here on exits non-zero: store unreachable,
    // schema creation failure, or listener bind failure.
    let pool = db::pool::create_pool(&config.database).await?;
    db::schema::ensure_schema(&pool).await?;

    let address = config.bind_address();
    let state = AppState::new(pool, config);
    let app = user_api::app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(service = SERVICE_NAME, %address, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
