/// Trace identifier propagation middleware
///
/// Every request that reaches the router gets a trace identifier: the
/// value of the inbound `X-Trace-Id` header when present and non-empty,
/// otherwise a freshly generated UUID v4. The identifier is carried in
/// a typed [`RequestContext`] in the request extensions and echoed back
/// on the response, so a client-supplied id round-trips verbatim.
///
/// Handlers extract the context with `Extension<RequestContext>` and
/// name `trace_id` explicitly in their log calls; nothing about the
/// identifier outlives the request.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the trace identifier in both directions.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Per-request context injected into request extensions
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation identifier for this request
    pub trace_id: String,
}

/// Assigns the trace identifier and echoes it on the response
pub async fn propagate_trace_id(mut request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestContext {
        trace_id: trace_id.clone(),
    });

    let mut response = next.run(request).await;

    match HeaderValue::from_str(&trace_id) {
        Ok(value) => {
            response.headers_mut().insert(TRACE_ID_HEADER, value);
        }
        Err(error) => {
            tracing::error!(error = %error, "failed to encode trace identifier header");
        }
    }

    response
}
