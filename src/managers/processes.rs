use crate::api::{SevallaApi, Updates};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const PROCESS_TOOLS: &[&str] = &["sevalla_get_process", "sevalla_update_process"];

#[derive(Debug, Deserialize)]
struct ProcessIdArgs {
    process_id: String,
}

#[derive(Debug, Deserialize)]
struct UpdateProcessArgs {
    process_id: String,
    #[serde(flatten)]
    updates: Updates,
}

#[derive(Clone)]
pub struct ProcessesManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl ProcessesManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("processes"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_get_process" => {
                let args: ProcessIdArgs = parse_args(tool, args)?;
                Ok(self.api.get_process(&args.process_id).await?)
            }
            "sevalla_update_process" => {
                let args: UpdateProcessArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .update_process(&args.process_id, &args.updates)
                    .await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ProcessesManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
