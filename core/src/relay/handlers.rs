//! Relay handlers
//! One parameterized handler serves /api/iqc and /api/config; health and the
//! 404 fallback are computed from local state only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::relay::error::RelayError;
use crate::relay::server::AppState;

/// Upstream action bound to a relay route at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Api,
    GetConfig,
}

impl Action {
    /// Value of the `action` query parameter on the outbound call
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::GetConfig => "getConfig",
        }
    }

    /// Fixed domain message used in the failure envelope
    fn domain_error(self) -> &'static str {
        match self {
            Self::Api => "Failed to fetch IQC data",
            Self::GetConfig => "Failed to fetch config",
        }
    }
}

/// Handle GET on a relay route: one outbound call, JSON passed through
/// untouched on success, uniform 500 envelope on any failure.
pub async fn relay(state: AppState, action: Action) -> Response {
    let base_url = match state.config.upstream.base_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            tracing::error!(
                "Rejecting action={} request: UPSTREAM_BASE_URL not configured",
                action.query_value()
            );
            return RelayError::MissingUpstreamUrl.into_envelope(action.domain_error());
        }
    };

    match state.upstream.fetch_action(base_url, action).await {
        Ok(data) => {
            tracing::info!("Relayed action={} from upstream", action.query_value());
            Json(data).into_response()
        }
        Err(err) => {
            tracing::error!("Relay failed for action={}: {}", action.query_value(), err);
            err.into_envelope(action.domain_error())
        }
    }
}

/// CORS preflight short-circuit: 200 with an empty body, no upstream call
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Handle GET /health - liveness envelope from local process state
pub async fn health(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "environment": state.config.runtime.environment.as_str(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// Fallback for unmatched routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
            "available_endpoints": ["/health", "/api/iqc", "/api/config"],
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_map_to_their_query_values() {
        assert_eq!(Action::Api.query_value(), "api");
        assert_eq!(Action::GetConfig.query_value(), "getConfig");
    }

    #[test]
    fn each_action_has_its_own_domain_message() {
        assert_ne!(
            Action::Api.domain_error(),
            Action::GetConfig.domain_error()
        );
    }
}
