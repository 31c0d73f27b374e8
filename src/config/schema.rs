//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so a minimal deployment needs nothing beyond
//! the environment variables.

use serde::{Deserialize, Serialize};

/// Root configuration for the API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment, controls log formatting.
    pub environment: Environment,

    /// HTTP server configuration (bind address, API prefix).
    pub server: ServerConfig,

    /// Relational datastore configuration.
    pub database: DatabaseConfig,

    /// Cache/broker configuration.
    pub redis: RedisConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g. "0.0.0.0").
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Prefix the application API is mounted under. Health routes stay at
    /// the root so probe paths survive API version changes.
    pub api_prefix: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Full bind address string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_prefix: "/api/v1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Relational datastore configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL. Required; supplied via `DATABASE_URL`.
    pub url: String,

    /// Reachability probe timeout in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            probe_timeout_secs: 5,
        }
    }
}

/// Cache/broker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection string, e.g. "redis://cache.internal:7000" or a bare
    /// hostname. Optional; absence degrades to the documented default
    /// target rather than failing.
    pub url: Option<String>,

    /// Reachability probe timeout in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: None,
            probe_timeout_secs: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
