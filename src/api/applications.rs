use super::types::{Pagination, PromoteApplicationRequest, Updates};
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_applications(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        let path = format!("/applications{}", self.listing_query(pagination)?);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn get_application(&self, app_id: &str) -> Result<Value, ApiError> {
        let path = format!("/applications/{}{}", app_id, self.company_query()?);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn update_application(
        &self,
        app_id: &str,
        updates: &Updates,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::put(format!("/applications/{}", app_id)).json(updates)?;
        self.client.execute(request).await
    }

    pub async fn delete_application(&self, app_id: &str) -> Result<(), ApiError> {
        let path = format!("/applications/{}{}", app_id, self.company_query()?);
        self.client.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }

    pub async fn promote_application(
        &self,
        request: &PromoteApplicationRequest,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post("/applications/promote").json(request)?;
        self.client.execute(request).await
    }
}
