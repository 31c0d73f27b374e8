//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationError>),
}

/// Load configuration, validate it, and return the immutable snapshot.
///
/// Starts from the optional TOML file (defaults when absent), then applies
/// environment overrides: `DATABASE_URL`, `REDIS_URL`, `PORT`, `LOG_LEVEL`,
/// `APP_ENV`. A missing `REDIS_URL` is not an error; the broker indicator
/// degrades to its default target.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database.url = url;
    }
    if let Ok(url) = env::var("REDIS_URL") {
        config.redis.url = Some(url);
    }
    if let Ok(port) = env::var("PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(_) => tracing::warn!(value = %port, "Ignoring non-numeric PORT"),
        }
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(environment) = env::var("APP_ENV") {
        match environment.parse() {
            Ok(environment) => config.environment = environment,
            Err(_) => tracing::warn!(value = %environment, "Ignoring unknown APP_ENV"),
        }
    }
}
