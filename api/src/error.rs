//! Unified error types for the SkyFare payments API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `GatewayError`: Payment gateway client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid secret key: {0}")]
    InvalidKey(String),
}

/// Payment gateway client errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway did not respond within {0} ms")]
    Timeout(u64),

    #[error("Gateway error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - gateway rejected the API credentials")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl GatewayError {
    /// Message surfaced to the client for a failed gateway call
    pub fn client_message(&self) -> String {
        match self {
            GatewayError::Api { message, .. } => message.clone(),
            GatewayError::Request(e) => format!("Payment gateway unreachable: {}", e),
            other => other.to_string(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::InvalidKey(msg)) => {
                tracing::error!("Invalid secret key: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Gateway(e) => {
                tracing::error!("Gateway error: {}", e);
                let status = match e {
                    GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    GatewayError::Unauthorized => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.client_message(), None)
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
