//! Report aggregation.
//!
//! # Responsibilities
//! - Fold indicator results into one aggregate status
//! - Map the aggregate status to an HTTP status code (200 up, 503 down)
//! - Serialize the stable `{status, details}` response body
//!
//! # Design Decisions
//! - A 503 is a successful check execution reporting an unhealthy
//!   dependency, not an engine error
//! - `details` keeps execution order; monitoring systems diff reports
//!   across checks, so key order must not depend on the serializer

use axum::http::StatusCode;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::health::indicator::{IndicatorResult, Status};

/// Combined Up/Down verdict across all run indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    status: Status,
    results: Vec<IndicatorResult>,
}

/// Combine indicator results into one report.
///
/// The aggregate is up exactly when every contained result is up; an empty
/// result set is vacuously up.
pub fn aggregate(results: Vec<IndicatorResult>) -> AggregateReport {
    let status = if results.iter().all(|r| r.status.is_up()) {
        Status::Up
    } else {
        Status::Down
    };
    AggregateReport { status, results }
}

impl AggregateReport {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn results(&self) -> &[IndicatorResult] {
        &self.results
    }

    /// HTTP status code contract consumed by the web layer.
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            Status::Up => StatusCode::OK,
            Status::Down => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

// Response body format:
// {"status": "ok"|"error", "details": {<name>: {"status": "up"|"down", ...detail}}}
//
// Hand-written so `details` preserves execution order; a map-based
// serialization would re-sort keys alphabetically.
impl Serialize for AggregateReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(
            "status",
            match self.status {
                Status::Up => "ok",
                Status::Down => "error",
            },
        )?;
        map.serialize_entry("details", &Details(&self.results))?;
        map.end()
    }
}

struct Details<'a>(&'a [IndicatorResult]);

impl Serialize for Details<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for result in self.0 {
            map.serialize_entry(&result.name, &Entry(result))?;
        }
        map.end()
    }
}

struct Entry<'a>(&'a IndicatorResult);

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.0.detail.len()))?;
        map.serialize_entry("status", &self.0.status)?;
        for (key, value) in &self.0.detail {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
