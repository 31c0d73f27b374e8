//! HTTP error envelope.
//!
//! # Responsibilities
//! - Render request-level failures (unknown route, invalid payload) as a
//!   stable JSON envelope
//! - Log each rendered error with its request context
//!
//! # Design Decisions
//! - The envelope never applies to health evaluation: a 503 readiness
//!   report is a successful check, not an error

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON body rendered for request-level errors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub timestamp: String,
    pub path: String,
    pub method: String,
    pub message: String,
}

/// A request-level error carrying enough context for the envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl ApiError {
    pub fn not_found(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("Cannot {method} {path}"),
            status: StatusCode::NOT_FOUND,
            method,
            path,
        }
    }

    pub fn bad_request(method: Method, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            method,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status_code: self.status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            path: self.path,
            method: self.method.to_string(),
            message: self.message,
        };

        tracing::error!(
            method = %body.method,
            path = %body.path,
            status = body.status_code,
            message = %body.message,
            "Request failed"
        );

        (self.status, Json(body)).into_response()
    }
}
