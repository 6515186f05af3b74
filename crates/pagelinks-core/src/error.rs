//! Paging error types.

use http::StatusCode;
use thiserror::Error;

/// Result type for paging operations.
pub type PagingResult<T> = Result<T, PagingError>;

/// Message carried when an explicit offset is paired with a zero limit.
pub const ZERO_LIMIT_MESSAGE: &str = "Limit must be greater than zero if offset is specified";

/// Errors raised while reading paging parameters from a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// The request's paging parameters cannot be paged over.
    #[error("{0}")]
    InvalidPagingRequest(String),
}

impl PagingError {
    /// Error for an explicit `offset` with a zero effective `limit`.
    pub fn zero_limit() -> Self {
        Self::InvalidPagingRequest(ZERO_LIMIT_MESSAGE.to_string())
    }

    /// Client-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidPagingRequest(message) => message,
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPagingRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for client handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPagingRequest(_) => "bad_request",
        }
    }

    /// Check if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
