//! Prediction endpoint client.

use cardia_core::wire::{PredictRequest, Prediction};

use crate::{error::ApiError, http::check_response, PredictorClient};

impl PredictorClient {
    /// Submit the six input values and return the model's verdict.
    ///
    /// Fields the caller left unparsed travel as `null`, which the service
    /// rejects with a 400; that surfaces here as [`ApiError::Api`] and the
    /// caller keeps whatever results it already had.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn predict(&self, request: &PredictRequest) -> Result<Prediction, ApiError> {
        let url = format!("{}/api/predict", self.base_url);
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        Ok(resp.json().await?)
    }
}
