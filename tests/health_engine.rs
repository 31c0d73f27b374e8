//! Engine-level tests: target resolution, failure isolation, aggregation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use dashboard_api::health::{
    aggregate, target, CheckRunner, ConnectionTarget, HealthIndicator, IndicatorResult,
    ProbeError, Status,
};

fn default_target() -> ConnectionTarget {
    ConnectionTarget::new("localhost", 6379)
}

#[test]
fn resolver_falls_back_to_default_when_absent() {
    let default = default_target();
    assert_eq!(target::resolve(None, "redis", &default), default);
    assert_eq!(target::resolve(Some(""), "redis", &default), default);
}

#[test]
fn resolver_treats_schemeless_input_as_bare_hostname() {
    let resolved = target::resolve(Some("cache.internal"), "redis", &default_target());
    assert_eq!(resolved, ConnectionTarget::new("cache.internal", 6379));
}

#[test]
fn resolver_parses_full_uri() {
    let resolved = target::resolve(
        Some("redis://cache.internal:7000"),
        "redis",
        &default_target(),
    );
    assert_eq!(resolved, ConnectionTarget::new("cache.internal", 7000));
}

#[test]
fn resolver_substitutes_default_port_when_uri_has_none() {
    let resolved = target::resolve(Some("redis://cache.internal"), "redis", &default_target());
    assert_eq!(resolved, ConnectionTarget::new("cache.internal", 6379));
}

#[test]
fn resolver_returns_full_default_for_malformed_uri() {
    let default = default_target();

    // Empty host.
    assert_eq!(target::resolve(Some("redis://"), "redis", &default), default);

    // Forbidden host character. The port is parsable but must not be
    // partially applied.
    assert_eq!(
        target::resolve(Some("redis://bad host:7000"), "redis", &default),
        default
    );

    // Non-numeric port.
    assert_eq!(
        target::resolve(Some("redis://cache.internal:abc"), "redis", &default),
        default
    );
}

#[test]
fn aggregate_of_empty_results_is_up() {
    let report = aggregate(Vec::new());
    assert_eq!(report.status(), Status::Up);
    assert_eq!(report.http_status().as_u16(), 200);
}

#[test]
fn aggregate_is_up_iff_every_result_is_up() {
    let report = aggregate(vec![
        IndicatorResult::up("database"),
        IndicatorResult::up("redis"),
    ]);
    assert_eq!(report.status(), Status::Up);
    assert_eq!(report.http_status().as_u16(), 200);

    let report = aggregate(vec![
        IndicatorResult::up("database"),
        IndicatorResult::down("redis", "connection refused"),
    ]);
    assert_eq!(report.status(), Status::Down);
    assert_eq!(report.http_status().as_u16(), 503);
}

#[test]
fn report_serializes_stable_body_in_execution_order() {
    let report = aggregate(vec![
        IndicatorResult::up("zebra"),
        IndicatorResult::down("alpha", "boom"),
    ]);
    let body = serde_json::to_string(&report).unwrap();

    // Key order in `details` follows execution order, not alphabetical order.
    assert_eq!(
        body,
        r#"{"status":"error","details":{"zebra":{"status":"up"},"alpha":{"status":"down","error":"boom"}}}"#
    );
}

struct AlwaysUp(&'static str);

#[async_trait]
impl HealthIndicator for AlwaysUp {
    fn name(&self) -> &str {
        self.0
    }

    async fn check(&self) -> Result<(), ProbeError> {
        Ok(())
    }
}

struct AlwaysDown(&'static str);

#[async_trait]
impl HealthIndicator for AlwaysDown {
    fn name(&self) -> &str {
        self.0
    }

    async fn check(&self) -> Result<(), ProbeError> {
        Err(ProbeError::Unreachable("connection refused".to_string()))
    }
}

struct Hanging(&'static str);

#[async_trait]
impl HealthIndicator for Hanging {
    fn name(&self) -> &str {
        self.0
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(100)
    }

    async fn check(&self) -> Result<(), ProbeError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

#[tokio::test]
async fn runner_isolates_failures_and_preserves_order() {
    let runner = CheckRunner::new(vec![
        Arc::new(AlwaysUp("first")),
        Arc::new(AlwaysDown("second")),
        Arc::new(Hanging("third")),
        Arc::new(AlwaysUp("fourth")),
    ]);

    let results = runner.run().await;

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third", "fourth"]);

    assert_eq!(results[0].status, Status::Up);

    assert_eq!(results[1].status, Status::Down);
    assert_eq!(results[1].detail["error"], "connection refused");

    assert_eq!(results[2].status, Status::Down);
    assert!(results[2].detail["error"].contains("timed out"));

    assert_eq!(results[3].status, Status::Up);
}

#[tokio::test]
async fn hanging_probe_is_cut_at_its_own_deadline() {
    let runner = CheckRunner::new(vec![Arc::new(Hanging("slow"))]);

    let start = std::time::Instant::now();
    let results = runner.run().await;

    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(results[0].status, Status::Down);
}
