#![forbid(unsafe_code)]

//! Status monitor for rpelog deployments.
//!
//! Serves a static HTML status fragment on `/` and a fixed JSON health
//! document on `/health`.

use axum::{extract::State, response::Html, routing::get, Json, Router};
use rpe_core::{Error, MonitorConfig, Result};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Immutable data the handlers render from
#[derive(Clone, Debug)]
pub struct MonitorState {
    pub title: String,
    pub environment: String,
}

impl From<&MonitorConfig> for MonitorState {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            title: config.title.clone(),
            environment: config.environment.clone(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Build the monitor's router
pub fn build_router(state: MonitorState) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn status_page(State(state): State<Arc<MonitorState>>) -> Html<String> {
    Html(format!(
        "\n    <h1>{}</h1>\n    <p>Status: Running ✅</p>\n    <p>Environment: {}</p>\n    ",
        state.title, state.environment
    ))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "monitor",
    })
}

/// Address to bind, from config plus an optional port override
pub fn listen_addr(config: &MonitorConfig, port_override: Option<&str>) -> Result<SocketAddr> {
    let port = config.resolve_port(port_override)?;
    let raw = format!("{}:{}", config.host, port);
    raw.parse()
        .map_err(|e| Error::Config(format!("invalid listen address '{}': {}", raw, e)))
}

/// Run the monitor until Ctrl+C or SIGTERM
pub async fn serve(config: &MonitorConfig, addr: SocketAddr) -> Result<()> {
    let app = build_router(MonitorState::from(config));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Monitor listening on {}", listener.local_addr()?);
    tracing::info!("Environment: {}", config.environment);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Monitor shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        }
    }
}
