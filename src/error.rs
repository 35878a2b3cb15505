/// Error handling for the API server
///
/// Handlers return `Result<T, ApiError>`; each variant maps to an HTTP
/// status with an empty body. Clients of this API treat the status code
/// as the whole error signal; the body stays empty even though the
/// middleware still stamps it with the JSON content type.
///
/// The mapping from a failure to a variant happens at the handler
/// boundary, where the failure is also logged with the request's trace
/// id. There is no blanket `From<sqlx::Error>` conversion: the same
/// store error maps to different statuses on different routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Request body failed to decode (400)
    BadRequest,

    /// Row missing, or a lookup failed on a route that reports 404
    NotFound,

    /// Store operation failed (500)
    Internal,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest => write!(f, "Bad request"),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Internal => write!(f, "Internal error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::BadRequest.to_string(), "Bad request");
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
        assert_eq!(ApiError::Internal.to_string(), "Internal error");
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::BadRequest.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
