//! Health-check endpoint client.

use cardia_core::wire::ServiceStatus;

use crate::{error::ApiError, http::check_response, PredictorClient};

impl PredictorClient {
    /// Ask the service whether it is up and has its model loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn health_check(&self) -> Result<ServiceStatus, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
