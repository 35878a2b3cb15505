/// Permissive CORS middleware
///
/// Attaches the cross-origin headers to every response and answers
/// `OPTIONS` preflight requests directly with an empty 200, without
/// invoking the rest of the middleware stack or any route handler.
///
/// All three headers go out on every response, not just preflight
/// responses; `tower_http::cors::CorsLayer` cannot express that, so
/// this is a hand-written `Layer`/`Service` pair.
///
/// # Headers Applied
///
/// - `Access-Control-Allow-Origin: *`
/// - `Access-Control-Allow-Methods: GET, POST, PUT, DELETE, OPTIONS`
/// - `Access-Control-Allow-Headers: Content-Type, X-Trace-Id`

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Permissive CORS middleware layer
#[derive(Clone, Default)]
pub struct CorsLayer;

impl CorsLayer {
    /// Creates a new CORS layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsMiddleware { inner }
    }
}

/// Permissive CORS middleware service
#[derive(Clone)]
pub struct CorsMiddleware<S> {
    inner: S,
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, X-Trace-Id"),
    );
}

impl<S> Service<Request> for CorsMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        // Preflight never reaches the inner stack.
        if request.method() == Method::OPTIONS {
            return Box::pin(async move {
                let mut response = StatusCode::OK.into_response();
                apply_cors_headers(response.headers_mut());
                Ok(response)
            });
        }

        let future = self.inner.call(request);

        Box::pin(async move {
            let mut response = future.await?;
            apply_cors_headers(response.headers_mut());
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::Service as _;

    async fn handler() -> &'static str {
        "handled"
    }

    fn test_app() -> Router {
        Router::new().route("/test", get(handler)).layer(CorsLayer::new())
    }

    #[tokio::test]
    async fn test_cors_headers_applied_to_normal_responses() {
        let mut app = test_app();

        let response = app
            .call(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type, X-Trace-Id"
        );
    }

    #[tokio::test]
    async fn test_options_short_circuits_with_empty_body() {
        let mut app = test_app();

        let response = app
            .call(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        // The route handler body never appears; preflight is empty.
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_options_short_circuits_for_unknown_routes_too() {
        let mut app = test_app();

        let response = app
            .call(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
