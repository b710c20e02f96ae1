use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use crate::utils::query::build_query;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_company_users(&self) -> Result<Value, ApiError> {
        let path = format!("/company/{}/users", self.company_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    /// `period_offset` counts billing periods back from the current one.
    pub async fn get_usage(&self, period_offset: Option<u32>) -> Result<Value, ApiError> {
        let query = build_query(&[("period_offset", period_offset.map(|v| v.to_string()))])?;
        let path = format!("/company/{}/paas-usage{}", self.company_id, query);
        self.client.execute(ApiRequest::get(path)).await
    }
}
