//! End-to-end tests for the HTTP surface.

mod common;

#[tokio::test]
async fn health_reports_each_dependency_independently() {
    let redis_addr = common::start_mock_redis().await;
    let config = common::test_config(Some(format!("redis://{redis_addr}")));
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    // The datastore points at a dead port; the broker answers. One broken
    // dependency must not suppress the other's result.
    assert_eq!(res.status(), 503);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["details"]["database"]["status"], "down");
    assert!(!body["details"]["database"]["error"]
        .as_str()
        .unwrap()
        .is_empty());
    assert_eq!(body["details"]["redis"]["status"], "up");

    shutdown.trigger();
}

#[tokio::test]
async fn health_details_keep_declaration_order() {
    let redis_addr = common::start_mock_redis().await;
    let config = common::test_config(Some(format!("redis://{redis_addr}")));
    let (addr, shutdown) = common::spawn_server(config).await;

    let body = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let database = body.find("\"database\"").unwrap();
    let redis = body.find("\"redis\"").unwrap();
    assert!(database < redis);

    shutdown.trigger();
}

#[tokio::test]
async fn broker_only_route_reports_up() {
    let redis_addr = common::start_mock_redis().await;
    let config = common::test_config(Some(format!("redis://{redis_addr}")));
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/health/redis"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["details"]["redis"]["status"], "up");
    assert!(body["details"].get("database").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn datastore_only_route_reports_down_with_cause() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/health/db")).await.unwrap();
    assert_eq!(res.status(), 503);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["details"]["database"]["status"], "down");
    assert!(!body["details"]["database"]["error"]
        .as_str()
        .unwrap()
        .is_empty());
    assert!(body["details"].get("redis").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn unreachable_broker_reports_down_without_failing_the_check() {
    // No mock listening; the configured target refuses connections.
    let config = common::test_config(Some("redis://127.0.0.1:59998".to_string()));
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/health/redis"))
        .await
        .unwrap();
    assert_eq!(res.status(), 503);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["details"]["redis"]["status"], "down");
    assert!(!body["details"]["redis"]["error"].as_str().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/health/db")).await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    shutdown.trigger();
}

#[tokio::test]
async fn hello_is_served_under_the_api_prefix() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/api/v1")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello World!");

    shutdown.trigger();
}

#[tokio::test]
async fn example_endpoint_echoes_valid_payload() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{addr}/api/v1/example"))
        .json(&serde_json::json!({
            "message": "Hello World!",
            "metadata": {"timestamp": "2023-01-01"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Hello World!");
    assert_eq!(body["metadata"]["timestamp"], "2023-01-01");

    shutdown.trigger();
}

#[tokio::test]
async fn example_endpoint_rejects_empty_message() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{addr}/api/v1/example"))
        .json(&serde_json::json!({"message": "  "}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/v1/example");
    assert_eq!(body["message"], "message should not be empty");

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_routes_get_the_error_envelope() {
    let config = common::test_config(None);
    let (addr, shutdown) = common::spawn_server(config).await;

    let res = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(res.status(), 404);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["path"], "/nope");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["message"], "Cannot GET /nope");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());

    shutdown.trigger();
}
