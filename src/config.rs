use crate::constants::{api, env};
use crate::errors::ConfigError;
use std::fmt;
use url::Url;

/// Connection settings for one Sevalla account. Built once at startup and
/// handed to the client; never read from the environment afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub company_id: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into().trim().to_string(),
            company_id: company_id.into().trim().to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let api_key = required(env::API_KEY)?;
        let company_id = required(env::COMPANY_ID)?;

        let mut config = Config::new(api_key, company_id);
        if let Some(raw) = lookup(env::API_URL).filter(|value| !value.trim().is_empty()) {
            let parsed = Url::parse(raw.trim()).map_err(|err| ConfigError::Invalid {
                name: env::API_URL,
                reason: err.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Invalid {
                    name: env::API_URL,
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            config = config.with_base_url(raw);
        }
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("company_id", &self.company_id)
            .finish()
    }
}
