mod applications;
mod auth;
mod config;
mod errors;
mod gateway;
mod intake;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
mod upskill;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::DemoIdentityProvider;
use crate::config::Config;
use crate::gateway::{FailOpen, LlmGateway};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::AppStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let mut llm = LlmClient::new(config.anthropic_api_key.clone())?
        .with_retry_backoff(Duration::from_millis(config.llm_retry_backoff_ms));
    if let Some(url) = &config.llm_api_url {
        llm = llm.with_api_url(url.clone());
    }
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("ANTHROPIC_API_KEY not set; every AI feature will use fallback answers");
    }

    let gateway = FailOpen::new(Arc::new(LlmGateway::new(llm)));

    let state = AppState::new(
        AppStore::seeded(),
        gateway,
        Arc::new(DemoIdentityProvider),
        config.clone(),
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
