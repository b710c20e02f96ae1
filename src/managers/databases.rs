use crate::api::{CreateDatabaseRequest, Pagination, SevallaApi, Updates};
use crate::errors::ToolError;
use crate::managers::parse_args;
use crate::mcp::envelope::deletion_ack;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const DATABASE_TOOLS: &[&str] = &[
    "sevalla_list_databases",
    "sevalla_get_database",
    "sevalla_create_database",
    "sevalla_update_database",
    "sevalla_delete_database",
];

#[derive(Debug, Deserialize)]
struct DatabaseIdArgs {
    database_id: String,
}

#[derive(Debug, Deserialize)]
struct UpdateDatabaseArgs {
    database_id: String,
    #[serde(flatten)]
    updates: Updates,
}

#[derive(Clone)]
pub struct DatabasesManager {
    logger: Logger,
    api: Arc<SevallaApi>,
}

impl DatabasesManager {
    pub fn new(logger: Logger, api: Arc<SevallaApi>) -> Self {
        Self {
            logger: logger.child("databases"),
            api,
        }
    }

    pub async fn handle_tool(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        match tool {
            "sevalla_list_databases" => {
                let pagination: Pagination = parse_args(tool, args)?;
                Ok(self.api.get_databases(&pagination).await?)
            }
            "sevalla_get_database" => {
                let args: DatabaseIdArgs = parse_args(tool, args)?;
                Ok(self.api.get_database(&args.database_id).await?)
            }
            "sevalla_create_database" => {
                let request: CreateDatabaseRequest = parse_args(tool, args)?;
                Ok(self.api.create_database(&request).await?)
            }
            "sevalla_update_database" => {
                let args: UpdateDatabaseArgs = parse_args(tool, args)?;
                Ok(self
                    .api
                    .update_database(&args.database_id, &args.updates)
                    .await?)
            }
            "sevalla_delete_database" => {
                let args: DatabaseIdArgs = parse_args(tool, args)?;
                self.api.delete_database(&args.database_id).await?;
                Ok(deletion_ack("Database"))
            }
            _ => Err(ToolError::unknown_tool(tool)),
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for DatabasesManager {
    async fn handle(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        self.logger.debug("handle_tool", Some(&Value::from(tool)));
        self.handle_tool(tool, args).await
    }
}
