//! Gateway Error Types
//!
//! Defines error types for the gateway layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record backend could not be reached
    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    /// The record backend answered with a non-success status
    #[error("Backend returned status {status}")]
    BackendStatus { status: u16, body: String },

    /// The record backend answered with a body we could not decode
    #[error("Backend response decode error: {0}")]
    BackendDecode(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            GatewayError::BackendUnreachable(_) => (StatusCode::BAD_GATEWAY, "BACKEND_UNREACHABLE"),
            GatewayError::BackendStatus { status, body } => {
                tracing::debug!(backend_status = *status, backend_body = %body, "Backend error body");
                // Relay client errors as-is so the UI sees what the backend said,
                // anything else collapses to a bad gateway
                let relayed = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (relayed, "BACKEND_ERROR")
            }
            GatewayError::BackendDecode(_) => (StatusCode::BAD_GATEWAY, "BACKEND_DECODE_ERROR"),
            GatewayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            GatewayError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Gateway error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_client_error_is_relayed() {
        let err = GatewayError::BackendStatus {
            status: 404,
            body: String::new(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_server_error_maps_to_bad_gateway() {
        let err = GatewayError::BackendStatus {
            status: 500,
            body: String::new(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = GatewayError::Validation("location cannot be empty".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
