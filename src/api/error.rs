use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::gateway::error::GatewayError;

/// HTTP-facing error. Every caught failure surfaces as a client error with
/// the message in the body; there is no distinct server-error tier.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error_type, message) = match self {
            ApiError::BadRequest(msg) => ("bad_request", msg),
            ApiError::Validation(msg) => ("validation_error", msg),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Service(e) => ApiError::BadRequest(e.to_string()),
            GatewayError::Conflict(msg) => ApiError::BadRequest(msg),
            GatewayError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}
