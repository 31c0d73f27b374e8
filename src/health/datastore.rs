//! Relational datastore indicator.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::health::indicator::{HealthIndicator, ProbeError};

/// Probes the PostgreSQL datastore with a trivial round trip.
///
/// Borrows the shared pool; the probe acquires a connection, runs `SELECT 1`
/// and releases it. Connection refusal, auth failure and timeout all surface
/// as a down result, never as an error past the runner boundary.
pub struct DatabaseIndicator {
    pool: PgPool,
    timeout: Duration,
}

impl DatabaseIndicator {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl HealthIndicator for DatabaseIndicator {
    fn name(&self) -> &str {
        "database"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn check(&self) -> Result<(), ProbeError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Unreachable(format!("database connection failed: {e}")))
    }
}
