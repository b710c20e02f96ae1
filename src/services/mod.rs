pub mod http_client;
pub mod logger;
pub mod tool_executor;
