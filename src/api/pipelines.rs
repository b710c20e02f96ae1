use super::types::{CreatePreviewAppRequest, Pagination};
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_pipelines(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        let path = format!("/pipelines{}", self.listing_query(pagination)?);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn create_preview_app(
        &self,
        pipeline_id: &str,
        request: &CreatePreviewAppRequest,
    ) -> Result<Value, ApiError> {
        let request =
            ApiRequest::post(format!("/pipelines/{}/create-preview-app", pipeline_id))
                .json(request)?;
        self.client.execute(request).await
    }
}
