use crate::api::{DeployStaticSiteRequest, Pagination, SevallaApi, Updates};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::mcp::envelope::deletion_ack;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const STATIC_SITE_TOOLS: &[&str] = &[
    "sevalla_list_static_sites",
    "sevalla_get_static_site",
    "sevalla_update_static_site",
    "sevalla_delete_static_site",
    "sevalla_get_static_site_deployment",
    "sevalla_deploy_static_site",
];

#[derive(Debug, Deserialize)]
struct StaticSiteIdArgs {
    static_site_id: String,
}

#[derive(Debug, Deserialize)]
struct UpdateStaticSiteArgs {
    static_site_id: String,
    #[serde(flatten)]
    updates: Updates,
}

#[derive(Debug, Deserialize)]
struct DeploymentIdArgs {
    deployment_id: String,
}

#[derive(Clone)]
pub struct StaticSitesManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl StaticSitesManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("static_sites"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_list_static_sites" => {
                let pagination: Pagination = parse_args(tool, args)?;
                Ok(self.api.get_static_sites(&pagination).await?)
            }
            "sevalla_get_static_site" => {
                let args: StaticSiteIdArgs = parse_args(tool, args)?;
                Ok(self.api.get_static_site(&args.static_site_id).await?)
            }
            "sevalla_update_static_site" => {
                let args: UpdateStaticSiteArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .update_static_site(&args.static_site_id, &args.updates)
                    .await?)
            }
            "sevalla_delete_static_site" => {
                let args: StaticSiteIdArgs = parse_args(tool, args)?;
                self.api.delete_static_site(&args.static_site_id).await?;
                Ok(deletion_ack("Static site"))
            }
            "sevalla_get_static_site_deployment" => {
                let args: DeploymentIdArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .get_static_site_deployment(&args.deployment_id)
                    .await?)
            }
            "sevalla_deploy_static_site" => {
                let request: DeployStaticSiteRequest = parse_args(tool, args)?;
                Ok(self.api.deploy_static_site(&request).await?)
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for StaticSitesManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
