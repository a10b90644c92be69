//! Prediction-service error types.

use thiserror::Error;

/// Errors that can occur when talking to the prediction service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Message from the service's error envelope, or the raw body.
        message: String,
    },

    /// The client could not be built from its configuration.
    #[error(transparent)]
    Config(#[from] cardia_config::ConfigError),
}
