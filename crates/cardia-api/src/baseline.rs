//! Healthy-baseline endpoint client.

use cardia_core::wire::HealthyBaseline;

use crate::{error::ApiError, http::check_response, PredictorClient};

impl PredictorClient {
    /// Fetch the averaged healthy reference profile the comparison chart
    /// plots against.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_healthy_baseline(&self) -> Result<HealthyBaseline, ApiError> {
        let url = format!("{}/api/healthy-baseline", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use cardia_core::wire::HealthyBaseline;

    // Shape the Flask service emits: camelCase keys, values rounded to two
    // decimals.
    const FIXTURE: &str = r#"{
        "age": 50.55,
        "sex": 0.65,
        "chestPainType": 1.38,
        "exerciseAngina": 0.14,
        "oldpeak": 0.41,
        "stSlope": 0.35
    }"#;

    #[test]
    fn parse_baseline_response() {
        let baseline: HealthyBaseline = serde_json::from_str(FIXTURE).unwrap();
        assert!((baseline.age - 50.55).abs() < f64::EPSILON);
        assert!((baseline.chest_pain_type - 1.38).abs() < f64::EPSILON);
        assert!((baseline.st_slope - 0.35).abs() < f64::EPSILON);
    }
}
