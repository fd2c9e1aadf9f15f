mod config;
mod errors;
mod extraction;
mod layout;
mod llm_client;
mod models;
mod render;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{BinaryTextRecovery, RecoveryLimits};
use crate::layout::LayoutConfig;
use crate::llm_client::LlmClient;
use crate::resume::LlmResumeModel;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Americanizer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Sizing constants for the configured paper; requests may override the page per call
    let layout = LayoutConfig::for_page(config.page_size);
    layout.validate()?;
    info!(
        "Layout config: {} ({}x{}px), fonts {}-{}px",
        layout.page_size.css_name(),
        layout.page.width_px,
        layout.page.height_px,
        layout.min_font_size,
        layout.max_font_size
    );

    let recovery = BinaryTextRecovery::new(RecoveryLimits::default());
    info!(
        "Text recovery limits: min {} chars, max {} chars",
        recovery.limits().min_meaningful_chars,
        recovery.limits().max_output_chars
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        resume_model: Arc::new(LlmResumeModel(llm)),
        layout: Arc::new(layout),
        recovery: Arc::new(recovery),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
