//! Error handling for the API gateway

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::error::Error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error information
    pub error: ErrorInfo,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Detailed error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code (string identifier for the error type)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Common(#[from] Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Status code and error code for this error
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Common(e) => match e {
                // Client errors (4xx)
                Error::BankNotFound(_) => (StatusCode::NOT_FOUND, "bank_not_found"),
                Error::BankAlreadyExists(_) => (StatusCode::BAD_REQUEST, "bank_already_exists"),
                Error::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),

                // Server errors (5xx)
                Error::Unsupported(_) => (StatusCode::NOT_IMPLEMENTED, "not_implemented"),
                Error::Network(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
                Error::Serialization(_) => (StatusCode::BAD_GATEWAY, "upstream_decode_error"),
                Error::ConfigurationError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        let (status, code) = self.classify();

        if status.is_server_error() {
            tracing::error!("API Error [{}]: {:?}", request_id, &self);
        } else {
            tracing::warn!("API Error [{}]: {}", request_id, &self);
        }

        let details = match &self {
            ApiError::Common(Error::Serialization(e)) => Some(serde_json::json!({
                "line": e.line(),
                "column": e.column(),
            })),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorInfo {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
            request_id: Some(request_id),
        };

        (status, Json(error_response)).into_response()
    }
}
