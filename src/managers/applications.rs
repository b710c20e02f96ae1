use crate::api::{Pagination, PromoteApplicationRequest, SevallaApi, Updates};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::mcp::envelope::deletion_ack;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const APPLICATION_TOOLS: &[&str] = &[
    "sevalla_list_applications",
    "sevalla_get_application",
    "sevalla_update_application",
    "sevalla_delete_application",
    "sevalla_promote_application",
];

#[derive(Debug, Deserialize)]
struct AppIdArgs {
    app_id: String,
}

/// `app_id` addresses the application; every other field is the update.
#[derive(Debug, Deserialize)]
struct UpdateAppArgs {
    app_id: String,
    #[serde(flatten)]
    updates: Updates,
}

#[derive(Clone)]
pub struct ApplicationsManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl ApplicationsManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("applications"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_list_applications" => {
                let pagination: Pagination = parse_args(tool, args)?;
                Ok(self.api.get_applications(&pagination).await?)
            }
            "sevalla_get_application" => {
                let args: AppIdArgs = parse_args(tool, args)?;
                Ok(self.api.get_application(&args.app_id).await?)
            }
            "sevalla_update_application" => {
                let args: UpdateAppArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .update_application(&args.app_id, &args.updates)
                    .await?)
            }
            "sevalla_delete_application" => {
                let args: AppIdArgs = parse_args(tool, args)?;
                self.api.delete_application(&args.app_id).await?;
                Ok(deletion_ack("Application"))
            }
            "sevalla_promote_application" => {
                let request: PromoteApplicationRequest = parse_args(tool, args)?;
                Ok(self.api.promote_application(&request).await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ApplicationsManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
