//! Axum response conversion for paging errors.

use crate::error::PagingError;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    success: bool,
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl IntoResponse for PagingError {
    fn into_response(self) -> Response {
        warn!(
            error = %self,
            code = self.error_code(),
            "Rejected paging request"
        );

        let body = ErrorResponse {
            success: false,
            error: ErrorBody {
                code: self.error_code(),
                message: self.message(),
            },
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use http::StatusCode;

    #[tokio::test]
    async fn test_error_converts_to_bad_request_response() {
        let response = PagingError::zero_limit().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": {
                    "code": "bad_request",
                    "message": "Limit must be greater than zero if offset is specified"
                }
            })
        );
    }
}
