#![allow(dead_code)]

use sevalla_mcp::api::SevallaApi;
use sevalla_mcp::app::App;
use sevalla_mcp::config::Config;
use sevalla_mcp::services::http_client::{ApiClient, RetryPolicy};
use sevalla_mcp::services::logger::{LogLevel, Logger};
use std::sync::Arc;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";
pub const COMPANY_ID: &str = "comp-1";

/// Same shape as the production schedule, scaled down to milliseconds.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        backoff_step_ms: 1,
        rate_limit_step_ms: 2,
        retry_after_unit_ms: 1,
    }
}

pub fn quiet_logger() -> Logger {
    Logger::new("test").with_level(LogLevel::Error)
}

pub fn config_for(server: &MockServer) -> Config {
    Config::new(API_KEY, COMPANY_ID).with_base_url(server.uri())
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&config_for(server), quiet_logger())
        .expect("client")
        .with_retry_policy(fast_policy())
}

pub fn api_for(server: &MockServer) -> Arc<SevallaApi> {
    Arc::new(SevallaApi::new(client_for(server), COMPANY_ID))
}

pub fn app_for(server: &MockServer) -> App {
    App::from_api(quiet_logger(), api_for(server)).expect("app")
}
