use super::types::{DeployStaticSiteRequest, Pagination, Updates};
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_static_sites(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        let path = format!("/static-sites{}", self.listing_query(pagination)?);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn get_static_site(&self, static_site_id: &str) -> Result<Value, ApiError> {
        let path = format!("/static-sites/{}", static_site_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn update_static_site(
        &self,
        static_site_id: &str,
        updates: &Updates,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::put(format!("/static-sites/{}", static_site_id)).json(updates)?;
        self.client.execute(request).await
    }

    pub async fn delete_static_site(&self, static_site_id: &str) -> Result<(), ApiError> {
        let path = format!("/static-sites/{}", static_site_id);
        self.client.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }

    pub async fn get_static_site_deployment(&self, deployment_id: &str) -> Result<Value, ApiError> {
        let path = format!("/static-site-deployments/{}", deployment_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn deploy_static_site(
        &self,
        request: &DeployStaticSiteRequest,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post("/static-site-deployments").json(request)?;
        self.client.execute(request).await
    }
}
