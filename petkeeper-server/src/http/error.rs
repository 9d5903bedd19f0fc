//! API error type with IntoResponse
//!
//! Errors become plain-text responses: 400 for caller mistakes,
//! 500 for storage failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DaoError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Invalid input or unknown identifier (400)
    BadRequest(String),

    /// Database failure (500, logged)
    Storage(DaoError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) => {
                tracing::debug!("Bad request: {}", message);
                message
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                e.to_string()
            }
        };

        (status, message).into_response()
    }
}

impl From<DaoError> for ApiError {
    fn from(e: DaoError) -> Self {
        match e {
            DaoError::InvalidArgument(message) => Self::BadRequest(message),
            DaoError::Storage(_) => Self::Storage(e),
        }
    }
}
