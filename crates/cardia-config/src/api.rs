//! Prediction-service endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default service origin. The bundled Flask backend listens here.
fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin of the prediction service, scheme included.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to every request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// The configured origin, trimmed of whitespace and trailing slashes so
    /// endpoint paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the base URL is empty.
    pub fn endpoint_root(&self) -> Result<String, ConfigError> {
        let root = self.base_url.trim().trim_end_matches('/');
        if root.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(root.to_string())
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn endpoint_root_trims_trailing_slashes() {
        let config = ApiConfig {
            base_url: "http://predictor.internal:5001///".into(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_root().unwrap(),
            "http://predictor.internal:5001"
        );
    }

    #[test]
    fn endpoint_root_rejects_empty_url() {
        let config = ApiConfig { base_url: "   ".into(), ..Default::default() };
        assert!(config.endpoint_root().is_err());
    }
}
