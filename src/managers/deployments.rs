use crate::api::{SevallaApi, StartDeploymentRequest};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const DEPLOYMENT_TOOLS: &[&str] = &["sevalla_get_deployment", "sevalla_start_deployment"];

#[derive(Debug, Deserialize)]
struct DeploymentIdArgs {
    deployment_id: String,
}

#[derive(Clone)]
pub struct DeploymentsManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl DeploymentsManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("deployments"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_get_deployment" => {
                let args: DeploymentIdArgs = parse_args(tool, args)?;
                Ok(self.api.get_deployment(&args.deployment_id).await?)
            }
            "sevalla_start_deployment" => {
                let request: StartDeploymentRequest = parse_args(tool, args)?;
                Ok(self.api.start_deployment(&request).await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for DeploymentsManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
