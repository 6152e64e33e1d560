//! Relay failure taxonomy and the uniform error envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Ways a single relay attempt can fail. Every variant maps to a 500 with
/// the `{success, error, details}` envelope; failures never escape the
/// handler boundary.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("UPSTREAM_BASE_URL is not configured")]
    MissingUpstreamUrl,

    #[error("Upstream error: {0}")]
    UpstreamStatus(u16),

    /// Transport failures, timeouts, and JSON decode errors from reqwest
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl RelayError {
    /// Build the client-facing 500 response. `domain_error` is the fixed
    /// message for the route; the underlying cause goes into `details`.
    pub fn into_envelope(self, domain_error: &str) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": domain_error,
                "details": self.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_message_carries_the_code() {
        assert_eq!(
            RelayError::UpstreamStatus(503).to_string(),
            "Upstream error: 503"
        );
    }

    #[test]
    fn missing_url_message_mentions_configuration() {
        assert!(RelayError::MissingUpstreamUrl
            .to_string()
            .contains("not configured"));
    }
}
