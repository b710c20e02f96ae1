use crate::api::{SevallaApi, Updates};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const NETWORKING_TOOLS: &[&str] = &[
    "sevalla_create_internal_connection",
    "sevalla_toggle_cdn",
    "sevalla_toggle_edge_cache",
    "sevalla_clear_cache",
];

#[derive(Debug, Deserialize)]
struct AppIdArgs {
    app_id: String,
}

#[derive(Debug, Deserialize)]
struct ConnectionArgs {
    app_id: String,
    #[serde(flatten)]
    body: Updates,
}

#[derive(Debug, Deserialize)]
struct ToggleArgs {
    app_id: String,
    enabled: bool,
}

#[derive(Clone)]
pub struct NetworkingManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl NetworkingManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("networking"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_create_internal_connection" => {
                let args: ConnectionArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .create_internal_connection(&args.app_id, &args.body)
                    .await?)
            }
            "sevalla_toggle_cdn" => {
                let args: ToggleArgs = parse_args(tool, args)?;
                Ok(self.api.toggle_cdn(&args.app_id, args.enabled).await?)
            }
            "sevalla_toggle_edge_cache" => {
                let args: ToggleArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .toggle_edge_cache(&args.app_id, args.enabled)
                    .await?)
            }
            "sevalla_clear_cache" => {
                let args: AppIdArgs = parse_args(tool, args)?;
                Ok(self.api.clear_cache(&args.app_id).await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for NetworkingManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
