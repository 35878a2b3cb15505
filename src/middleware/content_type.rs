/// JSON content-type middleware
///
/// Stamps `Content-Type: application/json` on every response that
/// passes through it, including error responses with empty bodies and
/// the plain-text liveness body. Clients expect the header even on
/// those responses.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Forces the JSON content type on the response
pub async fn force_json(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
