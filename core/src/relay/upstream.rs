//! Upstream client for calling the remote script service

use reqwest::Client;
use serde_json::Value;
use tokio::time::Duration;

use crate::relay::error::RelayError;
use crate::relay::handlers::Action;

const USER_AGENT: &str = concat!("iqc-relay/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    /// Build the shared client. The request timeout bounds the whole
    /// outbound call, headers to body.
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http_client })
    }

    /// Issue the single outbound GET for `action` and decode the body as
    /// JSON. No retries; the payload is opaque and never inspected.
    pub async fn fetch_action(&self, base_url: &str, action: Action) -> Result<Value, RelayError> {
        let url = format!("{}?action={}", base_url, action.query_value());
        tracing::debug!("Calling upstream: {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
