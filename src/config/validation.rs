//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port and timeouts non-zero)
//! - Require the settings the service cannot start without
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("database.url must be set (DATABASE_URL)")]
    MissingDatabaseUrl,

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("{0}.probe_timeout_secs must be non-zero")]
    ZeroProbeTimeout(&'static str),

    #[error("server.request_timeout_secs must be non-zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.database.url.is_empty() {
        errors.push(ValidationError::MissingDatabaseUrl);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }
    if config.database.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout("database"));
    }
    if config.redis.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout("redis"));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
