use super::types::Updates;
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::{json, Value};

impl SevallaApi {
    pub async fn create_internal_connection(
        &self,
        app_id: &str,
        body: &Updates,
    ) -> Result<Value, ApiError> {
        let request =
            ApiRequest::post(format!("/applications/{}/internal-connections", app_id)).json(body)?;
        self.client.execute(request).await
    }

    pub async fn toggle_cdn(&self, app_id: &str, enabled: bool) -> Result<Value, ApiError> {
        let request = ApiRequest::post(format!("/applications/{}/cdn/toggle-status", app_id))
            .json(&json!({ "enabled": enabled }))?;
        self.client.execute(request).await
    }

    pub async fn toggle_edge_cache(&self, app_id: &str, enabled: bool) -> Result<Value, ApiError> {
        let request =
            ApiRequest::post(format!("/applications/{}/edge-cache/toggle-status", app_id))
                .json(&json!({ "enabled": enabled }))?;
        self.client.execute(request).await
    }

    pub async fn clear_cache(&self, app_id: &str) -> Result<Value, ApiError> {
        let path = format!("/applications/{}/clear-cache", app_id);
        self.client.execute(ApiRequest::post(path)).await
    }
}
