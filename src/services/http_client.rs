use crate::config::Config;
use crate::constants::{api, retry as retry_constants};
use crate::errors::ApiError;
use crate::services::logger::Logger;
use reqwest::header::{HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Attempt ceiling and wait schedule for one logical call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    /// Backoff after a failed attempt is `(attempt + 1) * backoff_step_ms`.
    pub backoff_step_ms: u64,
    /// Wait after a 429 without a usable `Retry-After` is
    /// `(attempt + 1) * rate_limit_step_ms`.
    pub rate_limit_step_ms: u64,
    /// Multiplier applied to the whole seconds of `Retry-After`.
    pub retry_after_unit_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retry_constants::MAX_ATTEMPTS,
            backoff_step_ms: retry_constants::BACKOFF_STEP_MS,
            rate_limit_step_ms: retry_constants::RATE_LIMIT_STEP_MS,
            retry_after_unit_ms: retry_constants::RETRY_AFTER_UNIT_MS,
        }
    }
}

impl RetryPolicy {
    pub fn backoff_delay(&self, attempt: usize) -> Duration {
        Duration::from_millis((attempt as u64 + 1).saturating_mul(self.backoff_step_ms))
    }

    /// An unparseable `Retry-After` is treated as if the header were absent.
    pub fn rate_limit_delay(&self, attempt: usize, retry_after: Option<&str>) -> Duration {
        let from_header = retry_after
            .and_then(retry_after_seconds)
            .map(|secs| secs.saturating_mul(self.retry_after_unit_ms));
        let millis = from_header
            .unwrap_or_else(|| (attempt as u64 + 1).saturating_mul(self.rate_limit_step_ms));
        Duration::from_millis(millis)
    }
}

/// Leading integer of a `Retry-After` value: `"1.5"` is 1 and `"12s"` is 12.
/// Negative values clamp to zero. `None` when no digits lead the value.
fn retry_after_seconds(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(rest[..digits_end].parse::<u64>().unwrap_or(u64::MAX))
}

/// One request to issue: method, path relative to the base endpoint (query
/// string included) and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

enum Outcome {
    Success(Value),
    RateLimited { retry_after: Option<String> },
}

/// HTTP client for the Sevalla API: bearer authentication, bounded retries
/// and classification of every failure into an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    authorization: HeaderValue,
    retry: RetryPolicy,
    logger: Logger,
}

impl ApiClient {
    pub fn new(config: &Config, logger: Logger) -> Result<Self, ApiError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
                .map_err(|_| ApiError::Setup("API key contains invalid characters".to_string()))?;
        authorization.set_sensitive(true);
        let http = Client::builder()
            .user_agent(api::USER_AGENT)
            .build()
            .map_err(|err| ApiError::Setup(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
            retry: RetryPolicy::default(),
            logger: logger.child("client"),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.perform(request.method, &request.path, request.body.as_ref())
            .await
    }

    /// Issues one logical call, retrying rate limits and transient failures up
    /// to the attempt ceiling. Authentication failures end the call at once.
    pub async fn perform(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let max_attempts = self.retry.max_attempts;

        for attempt in 0..max_attempts {
            let err = match self.send_once(&method, &url, body).await {
                Ok(Outcome::Success(value)) => return Ok(value),
                Ok(Outcome::RateLimited { retry_after }) => {
                    // Waits even on the final attempt; the loop then falls
                    // through to RetriesExhausted.
                    let delay = self
                        .retry
                        .rate_limit_delay(attempt, retry_after.as_deref());
                    self.logger.warn(
                        "Rate limited, retrying",
                        Some(&serde_json::json!({
                            "method": method.as_str(),
                            "path": path,
                            "attempt": attempt + 1,
                            "delay_ms": delay.as_millis() as u64,
                        })),
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(err) => err,
            };

            if !err.is_retryable() || attempt + 1 >= max_attempts {
                return Err(err);
            }
            let delay = self.retry.backoff_delay(attempt);
            self.logger.warn(
                "Request failed, retrying",
                Some(&serde_json::json!({
                    "method": method.as_str(),
                    "path": path,
                    "attempt": attempt + 1,
                    "delay_ms": delay.as_millis() as u64,
                    "error": err.to_string(),
                })),
            );
            tokio::time::sleep(delay).await;
        }

        Err(ApiError::RetriesExhausted {
            attempts: max_attempts,
        })
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Outcome, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.authorization.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string());
            return Ok(Outcome::RateLimited { retry_after });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Authentication {
                status: status.as_u16(),
                body: read_text(response).await?,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Outcome::Success(Value::Object(Default::default())));
        }

        if !status.is_success() {
            return Err(ApiError::Remote {
                status: status.as_u16(),
                body: read_text(response).await?,
            });
        }

        let value = response.json::<Value>().await?;
        Ok(Outcome::Success(value))
    }
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    response.text().await.map_err(ApiError::from)
}
