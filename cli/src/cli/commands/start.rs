use std::path::PathBuf;

use iqc_relay_core::config::load_config;
use iqc_relay_core::relay::RelayServer;

pub async fn run(config_path: Option<PathBuf>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration, then let environment variables win
    let mut config = load_config(config_path)?;
    config.apply_env_overrides();

    // Apply port override if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }

    let upstream_set = config
        .upstream
        .base_url
        .as_deref()
        .is_some_and(|url| !url.is_empty());

    tracing::info!("Starting IQC Relay...");
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Host: {}", config.server.host);
    tracing::info!("  Environment: {}", config.runtime.environment);
    tracing::info!("  Upstream URL: {}", if upstream_set { "Set" } else { "Not set" });

    if !upstream_set {
        tracing::warn!("UPSTREAM_BASE_URL is not configured.");
        tracing::warn!("The relay will start but /api requests will fail until it is set.");
    }

    tracing::info!("Available endpoints: /health, /api/iqc, /api/config");

    let host = config.server.host.clone();
    let port = config.server.port;
    let server = RelayServer::new(config)?;

    tracing::info!("Relay server starting on http://{}:{}", host, port);
    tracing::info!("Press Ctrl+C to stop");

    // Run server (blocks until shutdown)
    server.run().await?;

    Ok(())
}
