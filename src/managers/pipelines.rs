use crate::api::{CreatePreviewAppRequest, Pagination, SevallaApi};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const PIPELINE_TOOLS: &[&str] = &["sevalla_get_pipelines", "sevalla_create_preview_app"];

#[derive(Debug, Deserialize)]
struct PreviewAppArgs {
    pipeline_id: String,
    #[serde(flatten)]
    request: CreatePreviewAppRequest,
}

#[derive(Clone)]
pub struct PipelinesManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl PipelinesManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("pipelines"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_get_pipelines" => {
                let pagination: Pagination = parse_args(tool, args)?;
                Ok(self.api.get_pipelines(&pagination).await?)
            }
            "sevalla_create_preview_app" => {
                let args: PreviewAppArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .create_preview_app(&args.pipeline_id, &args.request)
                    .await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for PipelinesManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
