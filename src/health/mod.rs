//! Health aggregation engine.
//!
//! # Data Flow
//! ```text
//! Check request (all / datastore only / broker only):
//!     target.rs resolves connection targets from the config snapshot
//!     → runner.rs probes each selected indicator (isolated, bounded)
//!     → report.rs aggregates results and picks 200 or 503
//! ```
//!
//! # Design Decisions
//! - Per-probe failures become Down results, never propagated errors
//! - No state survives a check invocation; every check reports current
//!   reachability, not history or trend
//! - Retries belong to the caller or monitoring system, not the engine

pub mod broker;
pub mod datastore;
pub mod indicator;
pub mod report;
pub mod runner;
pub mod target;

pub use broker::RedisIndicator;
pub use datastore::DatabaseIndicator;
pub use indicator::{HealthIndicator, IndicatorResult, ProbeError, Status};
pub use report::{aggregate, AggregateReport};
pub use runner::CheckRunner;
pub use target::ConnectionTarget;
