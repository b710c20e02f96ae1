//! Thin, typed facade over the Sevalla REST API.
//!
//! Every method shapes one request (path, optional query, optional body) and
//! hands it to [`ApiClient`]; retry and error handling live there.

mod applications;
mod company;
mod databases;
mod deployments;
mod networking;
mod pipelines;
mod processes;
mod static_sites;
pub mod types;

pub use types::{
    CreateDatabaseRequest, CreatePreviewAppRequest, DatabaseType, DeployStaticSiteRequest,
    Pagination, PromoteApplicationRequest, StartDeploymentRequest, Updates,
};

use crate::config::Config;
use crate::errors::ApiError;
use crate::services::http_client::ApiClient;
use crate::services::logger::Logger;
use crate::utils::query::build_query;

#[derive(Debug, Clone)]
pub struct SevallaApi {
    client: ApiClient,
    company_id: String,
}

impl SevallaApi {
    pub fn new(client: ApiClient, company_id: impl Into<String>) -> Self {
        Self {
            client,
            company_id: company_id.into(),
        }
    }

    pub fn from_config(config: &Config, logger: Logger) -> Result<Self, ApiError> {
        let client = ApiClient::new(config, logger)?;
        Ok(Self::new(client, config.company_id.clone()))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn company_query(&self) -> Result<String, ApiError> {
        build_query(&[("company", Some(self.company_id.clone()))])
    }

    fn listing_query(&self, pagination: &Pagination) -> Result<String, ApiError> {
        build_query(&[
            ("company", Some(self.company_id.clone())),
            ("limit", pagination.limit.map(|v| v.to_string())),
            ("offset", pagination.offset.map(|v| v.to_string())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(company: &str) -> SevallaApi {
        let config = Config::new("key", company);
        SevallaApi::from_config(&config, Logger::new("test")).expect("api")
    }

    #[test]
    fn listing_query_orders_company_then_pagination() {
        let query = api("comp")
            .listing_query(&Pagination {
                limit: Some(25),
                offset: Some(50),
            })
            .unwrap();
        assert_eq!(query, "?company=comp&limit=25&offset=50");
    }

    #[test]
    fn listing_query_skips_missing_pagination() {
        let query = api("comp").listing_query(&Pagination::default()).unwrap();
        assert_eq!(query, "?company=comp");
    }

    #[test]
    fn company_query_is_encoded() {
        assert_eq!(
            api("comp&id=test").company_query().unwrap(),
            "?company=comp%26id%3Dtest"
        );
    }
}
