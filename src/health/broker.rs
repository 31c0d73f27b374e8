//! Cache/broker indicator.

use std::time::Duration;

use async_trait::async_trait;

use crate::health::indicator::{HealthIndicator, ProbeError};
use crate::health::target::{self, ConnectionTarget};

/// URI scheme expected in the broker connection string.
const REDIS_SCHEME: &str = "redis";

/// Documented default target when no connection string is configured.
const DEFAULT_REDIS_HOST: &str = "localhost";
const DEFAULT_REDIS_PORT: u16 = 6379;

/// Probes the Redis cache/broker with a transport-level `PING`.
///
/// The connection string is re-resolved on every probe so a redeployed
/// configuration is never shadowed by a stale target. Each probe opens a
/// short-lived connection to the resolved target; nothing outlives the call.
pub struct RedisIndicator {
    url: Option<String>,
    timeout: Duration,
}

impl RedisIndicator {
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    /// Resolve the configured connection string into a reachable target.
    fn target(&self) -> ConnectionTarget {
        let default = ConnectionTarget::new(DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT);
        target::resolve(self.url.as_deref(), REDIS_SCHEME, &default)
    }
}

#[async_trait]
impl HealthIndicator for RedisIndicator {
    fn name(&self) -> &str {
        "redis"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let target = self.target();

        let client = redis::Client::open(format!("redis://{}:{}/", target.host, target.port))
            .map_err(|e| ProbeError::Unreachable(format!("invalid redis target {target}: {e}")))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                ProbeError::Unreachable(format!("redis connection to {target} failed: {e}"))
            })?;

        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ProbeError::Unreachable(format!("redis ping to {target} failed: {e}")))?;

        if reply == "PONG" {
            Ok(())
        } else {
            Err(ProbeError::Unreachable(format!(
                "redis ping to {target} returned unexpected reply: {reply}"
            )))
        }
    }
}
