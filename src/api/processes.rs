use super::types::Updates;
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_process(&self, process_id: &str) -> Result<Value, ApiError> {
        let path = format!(
            "/applications/processes/{}{}",
            process_id,
            self.company_query()?
        );
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn update_process(
        &self,
        process_id: &str,
        updates: &Updates,
    ) -> Result<Value, ApiError> {
        let request =
            ApiRequest::put(format!("/applications/processes/{}", process_id)).json(updates)?;
        self.client.execute(request).await
    }
}
