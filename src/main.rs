//! # did:web Service
//!
//! Serves participant DID documents and certificates, and the internal
//! management API, on the configured address.

use anyhow::{Context, Result};
use didweb_service::{AppState, MemoryStore, Settings, router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::load()?;
    let state = AppState::from_settings(&settings, MemoryStore::new())?;
    tracing::info!("hosting did:web identities for {}", settings.did_web_domain);

    let listener = TcpListener::bind(&settings.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.listen_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await.context("server stopped")
}
