use super::types::{CreateDatabaseRequest, Pagination, Updates, WithCompany};
use super::SevallaApi;
use crate::errors::ApiError;
use crate::services::http_client::ApiRequest;
use serde_json::Value;

impl SevallaApi {
    pub async fn get_databases(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        let path = format!("/databases{}", self.listing_query(pagination)?);
        self.client.execute(ApiRequest::get(path)).await
    }

    pub async fn get_database(&self, database_id: &str) -> Result<Value, ApiError> {
        let path = format!("/databases/{}", database_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    /// The tenant identifier goes into the body for this endpoint.
    pub async fn create_database(&self, request: &CreateDatabaseRequest) -> Result<Value, ApiError> {
        let request = ApiRequest::post("/databases").json(&WithCompany {
            body: request,
            company: &self.company_id,
        })?;
        self.client.execute(request).await
    }

    pub async fn update_database(
        &self,
        database_id: &str,
        updates: &Updates,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::put(format!("/databases/{}", database_id)).json(updates)?;
        self.client.execute(request).await
    }

    pub async fn delete_database(&self, database_id: &str) -> Result<(), ApiError> {
        let path = format!("/databases/{}", database_id);
        self.client.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }
}
