/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use user_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = user_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware};
use axum::{routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; the
/// pool and config are the only process-wide resources handlers touch.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /healthz                  # Liveness (always 200)
/// ├── /ready                    # Readiness (store ping)
/// └── /api/go/
///     └── /users                # User CRUD
///         ├── GET    /          # List users
///         ├── POST   /          # Create user
///         ├── GET    /:id       # Get user
///         ├── PUT    /:id       # Update user
///         └── DELETE /:id       # Delete user
/// ```
///
/// # Middleware Stack
///
/// Outermost first:
/// 1. CORS (permissive headers on every response, OPTIONS short-circuit)
/// 2. Trace id assignment and echo
/// 3. Forced JSON content type
/// 4. Request/response logging (tower-http TraceLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new()
        .route("/healthz", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness));

    let user_routes = Router::new()
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/users/:id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        );

    Router::new()
        .merge(health_routes)
        .nest("/api/go", user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(axum::middleware::from_fn(
            middleware::content_type::force_json,
        ))
        .layer(axum::middleware::from_fn(
            middleware::trace::propagate_trace_id,
        ))
        .layer(middleware::cors::CorsLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, DatabaseConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::Service as _;

    fn test_state() -> AppState {
        // Lazy pool: no connection is made until a handler touches the
        // store, so middleware and liveness can be exercised without a
        // running database.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgresql://localhost:1/unreachable")
            .unwrap();

        AppState::new(
            pool,
            Config {
                api: ApiConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8000,
                },
                database: DatabaseConfig {
                    url: "postgresql://localhost:1/unreachable".to_string(),
                    max_connections: 1,
                },
            },
        )
    }

    #[tokio::test]
    async fn test_healthz_serves_through_full_stack() {
        let mut app = build_router(test_state());

        let response = app
            .call(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert!(response.headers().contains_key("x-trace-id"));
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "*"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }
}
