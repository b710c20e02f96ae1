use super::types::StartDeploymentRequest;
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_deployment(&self, deployment_id: &str) -> Result<Value, ApiError> {
        let path = format!(
            "/applications/deployments/{}{}",
            deployment_id,
            self.company_query()?
        );
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn start_deployment(
        &self,
        request: &StartDeploymentRequest,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post("/applications/deployments").json(request)?;
        self.client.execute(request).await
    }
}
