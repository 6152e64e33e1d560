//! Relay server - Axum HTTP server

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::relay::cors;
use crate::relay::handlers::{self, Action};
use crate::relay::upstream::UpstreamClient;

/// Application state shared across handlers. Nothing in here is mutable;
/// each request is fully independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
    pub started_at: Instant,
    pub allow_origin: HeaderValue,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let allow_origin = HeaderValue::from_str(&config.cors.allow_origin).map_err(|e| {
            anyhow::anyhow!(
                "Invalid cors.allow_origin {:?}: {}",
                config.cors.allow_origin,
                e
            )
        })?;
        let upstream = UpstreamClient::new(config.upstream.timeout_secs)?;

        Ok(Self {
            config: Arc::new(config),
            upstream,
            started_at: Instant::now(),
            allow_origin,
        })
    }
}

/// Relay server instance
pub struct RelayServer {
    host: String,
    port: u16,
    state: AppState,
}

impl RelayServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let host = config.server.host.clone();
        let port = config.server.port;
        let state = AppState::new(config)?;
        Ok(Self { host, port, state })
    }

    /// Run the relay server (blocking)
    pub async fn run(self) -> anyhow::Result<()> {
        let app = build_router(self.state);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Relay server listening on {}", addr);

        // Handle graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }
}

/// Assemble the router. Separate from `run` so tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/iqc", relay_route(Action::Api))
        .route("/api/config", relay_route(Action::GetConfig))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::apply_cors_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One parameterized handler registered per action; OPTIONS short-circuits
/// before any upstream work.
fn relay_route(action: Action) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| handlers::relay(state, action))
        .options(handlers::preflight)
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
