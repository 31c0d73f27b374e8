//! Indicator abstraction.
//!
//! # Responsibilities
//! - Define the probe contract every dependency check implements
//! - Represent a single probe outcome as an explicit result value
//!
//! # Design Decisions
//! - `check` returns `Result`, never panics; the runner converts every
//!   outcome into an `IndicatorResult` before aggregation
//! - Each indicator carries its own probe deadline

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Binary reachability status of a dependency at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn is_up(self) -> bool {
        self == Status::Up
    }
}

/// Why a probe failed.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The dependency could not be reached or rejected the probe.
    #[error("{0}")]
    Unreachable(String),

    /// The probe did not complete within its deadline.
    #[error("probe timed out after {0:?}")]
    Timeout(Duration),
}

/// Outcome of one indicator invocation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorResult {
    /// Stable indicator name, used as the key in the aggregated report.
    pub name: String,
    pub status: Status,
    /// Extra per-indicator detail, e.g. an `error` cause string when down.
    pub detail: BTreeMap<String, String>,
}

impl IndicatorResult {
    pub fn up(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Up,
            detail: BTreeMap::new(),
        }
    }

    pub fn down(name: impl Into<String>, error: impl Into<String>) -> Self {
        let mut detail = BTreeMap::new();
        detail.insert("error".to_string(), error.into());
        Self {
            name: name.into(),
            status: Status::Down,
            detail,
        }
    }
}

/// A named, independent probe of one dependency.
///
/// Implementations issue a single bounded reachability operation against a
/// connection or pool owned elsewhere; they never open long-lived connections
/// and never let a dependency failure escape as a panic.
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    /// Stable name identifying the dependency in reports.
    fn name(&self) -> &str;

    /// Deadline the runner applies to each `check` call.
    fn timeout(&self) -> Duration {
        Duration::from_secs(5)
    }

    /// Probe the dependency once, reporting current state only.
    async fn check(&self) -> Result<(), ProbeError>;
}
