use crate::api::SevallaApi;
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const COMPANY_TOOLS: &[&str] = &["sevalla_get_company_users", "sevalla_get_usage"];

#[derive(Debug, Deserialize)]
struct UsageArgs {
    #[serde(default)]
    period_offset: Option<u32>,
}

#[derive(Clone)]
pub struct CompanyManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl CompanyManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("company"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_get_company_users" => Ok(self.api.get_company_users().await?),
            "sevalla_get_usage" => {
                let args: UsageArgs = parse_args(tool, args)?;
                Ok(self.api.get_usage(args.period_offset).await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for CompanyManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
