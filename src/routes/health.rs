/// Liveness and readiness endpoints
///
/// Liveness (`GET /healthz`) reports only that the process is serving
/// requests and always answers 200. Readiness (`GET /ready`) pings the
/// store and answers 503 while it is unreachable, so an orchestrator
/// can keep the instance out of rotation without restarting it.

use crate::{app::AppState, db, middleware::trace::RequestContext};
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

/// Readiness response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// "healthy" or "unhealthy"
    pub status: String,

    /// Reason the store is unavailable, present only when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness handler
///
/// Always 200; the body is stamped with the JSON content type by the
/// middleware like every other response.
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness handler
///
/// Pings the store over a pooled connection.
pub async fn readiness(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> (StatusCode, Json<ReadyResponse>) {
    match db::pool::ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "healthy".to_string(),
                error: None,
            }),
        ),
        Err(error) => {
            tracing::error!(error = %error, trace_id = %ctx.trace_id, "readiness: store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "unhealthy".to_string(),
                    error: Some("database unreachable".to_string()),
                }),
            )
        }
    }
}
