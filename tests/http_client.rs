mod common;
use common::{client_for, quiet_logger, API_KEY};

use serde_json::json;
use sevalla_mcp::config::Config;
use sevalla_mcp::errors::ApiError;
use sevalla_mcp::services::http_client::{ApiClient, ApiRequest};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_bearer_key_and_returns_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/company/comp-1/users"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"company": {"users": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .execute(ApiRequest::get("/company/comp-1/users"))
        .await
        .expect("success");
    assert_eq!(value, json!({"company": {"users": []}}));
}

#[tokio::test]
async fn key_is_trimmed_before_use() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer padded-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new("  padded-key \n", "comp").with_base_url(server.uri());
    let client = ApiClient::new(&config, quiet_logger()).expect("client");
    client.execute(ApiRequest::get("/x")).await.expect("success");
}

#[tokio::test]
async fn content_type_only_accompanies_a_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .execute(
            ApiRequest::post("/applications/deployments")
                .json(&json!({"app_id": "app-1"}))
                .unwrap(),
        )
        .await
        .expect("post");
    client
        .execute(ApiRequest::get("/applications"))
        .await
        .expect("get");

    let requests = server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 2);
    let post = &requests[0];
    assert_eq!(
        post.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(body, json!({"app_id": "app-1"}));
    assert!(requests[1].headers.get("content-type").is_none());
}

#[tokio::test]
async fn no_content_is_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/databases/db-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .execute(ApiRequest::delete("/databases/db-1"))
        .await
        .expect("success");
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn unauthorized_fails_after_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/applications"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed (401): Unauthorized");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn forbidden_fails_after_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/applications"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Authentication {
            status: 403,
            body: "Forbidden".to_string()
        }
    );
}

#[tokio::test]
async fn rate_limit_is_waited_out_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .execute(ApiRequest::get("/pipelines"))
        .await
        .expect("success");
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn persistent_rate_limit_exhausts_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/pipelines"))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::RetriesExhausted { attempts: 3 });
    assert_eq!(err.to_string(), "Request failed after 3 retries");
}

#[tokio::test]
async fn server_errors_are_retried_then_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/applications"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "API error 500: Internal Server Error");
}

#[tokio::test]
async fn not_found_is_retried_like_other_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/applications/missing"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn transient_failure_recovers_on_next_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"app": {"id": "a"}})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .execute(ApiRequest::get("/applications/a"))
        .await
        .expect("success");
    assert_eq!(value["app"]["id"], "a");
}

#[tokio::test]
async fn malformed_success_body_is_retried_as_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute(ApiRequest::get("/applications"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn connection_refused_surfaces_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let config =
        Config::new(API_KEY, "comp").with_base_url(format!("http://127.0.0.1:{}", port));
    let client = ApiClient::new(&config, quiet_logger())
        .expect("client")
        .with_retry_policy(common::fast_policy());

    let err = client
        .execute(ApiRequest::get("/applications"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn retry_after_is_honored_in_real_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let config = Config::new(API_KEY, "comp").with_base_url(server.uri());
    let client = ApiClient::new(&config, quiet_logger()).expect("client");
    let started = Instant::now();
    client.execute(ApiRequest::get("/x")).await.expect("success");
    assert!(started.elapsed() >= Duration::from_millis(1_000));
}

#[tokio::test]
async fn negative_retry_after_retries_without_waiting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "-5"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new(API_KEY, "comp").with_base_url(server.uri());
    let client = ApiClient::new(&config, quiet_logger()).expect("client");
    let started = Instant::now();
    let value = client.execute(ApiRequest::get("/x")).await.expect("success");
    assert_eq!(value, json!({"ok": true}));
    assert!(started.elapsed() < Duration::from_millis(1_500));
}
