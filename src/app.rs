use crate::api::SevallaApi;
use crate::config::Config;
use crate::errors::ToolError;
use crate::managers::{
    applications::APPLICATION_TOOLS, company::COMPANY_TOOLS, databases::DATABASE_TOOLS,
    deployments::DEPLOYMENT_TOOLS, networking::NETWORKING_TOOLS, pipelines::PIPELINE_TOOLS,
    processes::PROCESS_TOOLS, static_sites::STATIC_SITE_TOOLS, ApplicationsManager,
    CompanyManager, DatabasesManager, DeploymentsManager, NetworkingManager, PipelinesManager,
    ProcessesManager, StaticSitesManager,
};
use crate::mcp::catalog::tool_catalog;
use crate::services::logger::Logger;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub api: Arc<SevallaApi>,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    fn validate_tool_wiring(handlers: &HashMap<String, Arc<dyn ToolHandler>>) -> Result<(), ToolError> {
        let mut missing: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| !handlers.contains_key(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_details(serde_json::json!({ "missing_tools": missing })))
    }

    fn register(
        handlers: &mut HashMap<String, Arc<dyn ToolHandler>>,
        tools: &[&str],
        handler: Arc<dyn ToolHandler>,
    ) {
        for tool in tools {
            handlers.insert((*tool).to_string(), handler.clone());
        }
    }

    pub fn initialize(config: &Config) -> Result<Self, ToolError> {
        let logger = Logger::new("sevalla");
        let api = Arc::new(SevallaApi::from_config(config, logger.child("api"))?);
        Self::from_api(logger, api)
    }

    /// Wires every manager against an already built facade.
    pub fn from_api(logger: Logger, api: Arc<SevallaApi>) -> Result<Self, ToolError> {
        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        Self::register(
            &mut handlers,
            COMPANY_TOOLS,
            Arc::new(CompanyManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            APPLICATION_TOOLS,
            Arc::new(ApplicationsManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            PROCESS_TOOLS,
            Arc::new(ProcessesManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            NETWORKING_TOOLS,
            Arc::new(NetworkingManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            DEPLOYMENT_TOOLS,
            Arc::new(DeploymentsManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            PIPELINE_TOOLS,
            Arc::new(PipelinesManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            DATABASE_TOOLS,
            Arc::new(DatabasesManager::new(logger.clone(), api.clone())),
        );
        Self::register(
            &mut handlers,
            STATIC_SITE_TOOLS,
            Arc::new(StaticSitesManager::new(logger.clone(), api.clone())),
        );

        Self::validate_tool_wiring(&handlers)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), handlers));
        logger.info(
            "Tools registered",
            Some(&serde_json::json!({ "count": tool_catalog().len() })),
        );

        Ok(Self {
            logger,
            api,
            tool_executor,
        })
    }
}
