pub mod api {
    pub const DEFAULT_BASE_URL: &str = "https://api.sevalla.com/v2";
    pub const USER_AGENT: &str = concat!("sevalla-mcp/", env!("CARGO_PKG_VERSION"));
}

pub mod env {
    pub const API_KEY: &str = "SEVALLA_API_KEY";
    pub const COMPANY_ID: &str = "SEVALLA_COMPANY_ID";
    pub const API_URL: &str = "SEVALLA_API_URL";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub mod retry {
    pub const MAX_ATTEMPTS: usize = 3;
    pub const BACKOFF_STEP_MS: u64 = 1_000;
    pub const RATE_LIMIT_STEP_MS: u64 = 2_000;
    pub const RETRY_AFTER_UNIT_MS: u64 = 1_000;
}

pub mod server {
    pub const NAME: &str = "sevalla-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}

pub mod tools {
    pub const NAME_PREFIX: &str = "sevalla_";
    pub const MAX_SCHEMA_ERRORS: usize = 10;
    pub const MAX_SUGGESTIONS: usize = 3;
}
