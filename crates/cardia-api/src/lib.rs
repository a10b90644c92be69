//! # cardia-api
//!
//! HTTP client for the Cardia heart-disease prediction service.
//!
//! The service exposes four JSON endpoints on one origin:
//! - `POST /api/predict`: model inference over the six input fields
//! - `GET /api/healthy-baseline`: reference values for the comparison chart
//! - `GET /api/feature-importance`: ranked model feature weights
//! - `GET /api/health`: liveness and model-load status
//!
//! All calls share one status-code gate ([`ApiError::Api`] on non-success),
//! so a failure looks the same no matter which endpoint produced it.

mod baseline;
mod error;
mod http;
mod importance;
mod predict;
mod status;

pub use error::ApiError;

use cardia_config::ApiConfig;

/// HTTP client bound to one prediction-service origin.
pub struct PredictorClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictorClient {
    /// Create a client for the configured service origin, with the
    /// configured per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the configured base URL is empty.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.endpoint_root()?;
        let http = reqwest::Client::builder()
            .user_agent("cardia/0.1")
            .timeout(config.timeout())
            .build()
            .expect("reqwest client should build");
        Ok(Self { http, base_url })
    }

    /// The origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
