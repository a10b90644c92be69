//! Shared HTTP response helpers for the endpoint modules.
//!
//! Centralizes the status-code check so every endpoint fails the same way:
//! non-success → [`ApiError::Api`] carrying the service's error message. The
//! service wraps failures as `{"error": "..."}` with a 400; other bodies are
//! passed through verbatim.

use crate::error::ApiError;

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. A non-success status becomes
/// [`ApiError::Api`] with the message unwrapped from the service's
/// `{"error": "..."}` envelope when the body parses as one, else the raw
/// body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status,
            message: extract_message(&body),
        });
    }
    Ok(resp)
}

/// Pull the message out of the error envelope, falling back to the raw body.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.to_string(), |envelope| envelope.error)
}
