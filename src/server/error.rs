//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

/// Error response body, `{ "detail": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// An error that maps directly onto an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// 400 for invalid parameters or rejected uploads.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        warn!("Bad request: {detail}");
        Self {
            status: StatusCode::BAD_REQUEST,
            detail,
        }
    }

    /// 500 with the failure cause surfaced in the body.
    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        error!("Internal error: {detail}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail,
        }
    }

    /// 503 for an unhealthy service.
    pub fn unavailable(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<crate::Error> for ApiError {
    fn from(e: crate::Error) -> Self {
        Self::internal(format!("Error processing image: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::unavailable("x").status,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
