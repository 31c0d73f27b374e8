//! Check execution.
//!
//! # Responsibilities
//! - Run an ordered set of indicators and collect every result
//! - Contain each probe failure so one broken dependency never suppresses
//!   the others
//!
//! # Design Decisions
//! - Probes run concurrently, each under its own deadline; result order
//!   stays equal to indicator declaration order
//! - No retry: a health check reports current state, not eventual state

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::time;

use crate::health::indicator::{HealthIndicator, IndicatorResult, ProbeError};

/// Executes a fixed, ordered set of indicators.
pub struct CheckRunner {
    indicators: Vec<Arc<dyn HealthIndicator>>,
}

impl CheckRunner {
    pub fn new(indicators: Vec<Arc<dyn HealthIndicator>>) -> Self {
        Self { indicators }
    }

    /// Probe every indicator and collect the results in declaration order.
    pub async fn run(&self) -> Vec<IndicatorResult> {
        let probes = self.indicators.iter().map(|i| Self::probe(i.as_ref()));
        join_all(probes).await
    }

    /// Run a single probe under its deadline, converting every outcome into
    /// an `IndicatorResult`.
    async fn probe(indicator: &dyn HealthIndicator) -> IndicatorResult {
        let deadline = indicator.timeout();

        match time::timeout(deadline, indicator.check()).await {
            Ok(Ok(())) => IndicatorResult::up(indicator.name()),
            Ok(Err(e)) => {
                tracing::warn!(indicator = indicator.name(), error = %e, "Probe failed");
                IndicatorResult::down(indicator.name(), e.to_string())
            }
            Err(_) => {
                tracing::warn!(indicator = indicator.name(), timeout = ?deadline, "Probe timed out");
                IndicatorResult::down(indicator.name(), ProbeError::Timeout(deadline).to_string())
            }
        }
    }
}
