//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → environment overrides (DATABASE_URL, REDIS_URL, PORT, LOG_LEVEL, APP_ENV)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is an immutable startup snapshot; subsystems receive it
//!   explicitly, there is no process-wide singleton
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, DatabaseConfig, Environment, LoggingConfig, RedisConfig, ServerConfig};
