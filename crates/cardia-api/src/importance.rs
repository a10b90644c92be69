//! Feature-importance endpoint client.

use cardia_core::wire::FeatureWeight;

use crate::{error::ApiError, http::check_response, PredictorClient};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportanceResponse {
    feature_importance: Vec<FeatureWeight>,
}

impl PredictorClient {
    /// Fetch the model's feature weights, already sorted by the service
    /// (highest first). The order is preserved as received.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_feature_importance(&self) -> Result<Vec<FeatureWeight>, ApiError> {
        let url = format!("{}/api/feature-importance", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: ImportanceResponse = resp.json().await?;
        Ok(data.feature_importance)
    }
}
