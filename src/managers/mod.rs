//! One [`ToolHandler`](crate::services::tool_executor::ToolHandler) per
//! resource group. Each manager deserializes the validated arguments into
//! typed structs and calls the matching facade method.

pub mod applications;
pub mod company;
pub mod databases;
pub mod deployments;
pub mod networking;
pub mod pipelines;
pub mod processes;
pub mod static_sites;

pub use applications::ApplicationsManager;
pub use company::CompanyManager;
pub use databases::DatabasesManager;
pub use deployments::DeploymentsManager;
pub use networking::NetworkingManager;
pub use pipelines::PipelinesManager;
pub use processes::ProcessesManager;
pub use static_sites::StaticSitesManager;

use crate::errors::ToolError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args)
        .map_err(|err| ToolError::invalid_params(format!("Invalid arguments for {}: {}", tool, err)))
}
