//! Request handlers.
//!
//! # Responsibilities
//! - Expose the health check groups over HTTP
//! - Serve the application surface (hello, example echo)
//! - Render the 404 envelope for unmatched routes

use std::sync::Arc;

use axum::extract::{OriginalUri, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::health::{aggregate, CheckRunner, HealthIndicator};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /health: probe every registered dependency.
pub async fn check_all(State(state): State<AppState>) -> Response {
    run_checks(state.all_indicators()).await
}

/// GET /health/db: probe the datastore only.
pub async fn check_database(State(state): State<AppState>) -> Response {
    run_checks(vec![state.database_indicator()]).await
}

/// GET /health/redis: probe the cache/broker only.
pub async fn check_redis(State(state): State<AppState>) -> Response {
    run_checks(vec![state.redis_indicator()]).await
}

/// Run the selected indicators and render the aggregate report with its
/// status code (200 all up, 503 any down).
async fn run_checks(indicators: Vec<Arc<dyn HealthIndicator>>) -> Response {
    let runner = CheckRunner::new(indicators);
    let report = aggregate(runner.run().await);
    (report.http_status(), Json(report)).into_response()
}

/// GET under the API prefix.
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Payload for the example echo endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleDto {
    /// The message content. Required, non-empty.
    pub message: String,

    /// Optional metadata, echoed back untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// POST /example under the API prefix: validate and echo the payload.
pub async fn create_example(
    method: Method,
    OriginalUri(uri): OriginalUri,
    Json(dto): Json<ExampleDto>,
) -> Result<(StatusCode, Json<ExampleDto>), ApiError> {
    if dto.message.trim().is_empty() {
        return Err(ApiError::bad_request(
            method,
            uri.path(),
            "message should not be empty",
        ));
    }
    Ok((StatusCode::CREATED, Json(dto)))
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(method, uri.path())
}
