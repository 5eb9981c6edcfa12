mod config;
mod db;
mod errors;
mod extractors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::engine::MatchEngine;
use crate::matching::semantic::LlmSemanticMatcher;
use crate::matching::store::{MatchStore, PgMatchStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the semantic matcher built on it
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.llm_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );
    let engine = Arc::new(MatchEngine::new(Arc::new(LlmSemanticMatcher::new(llm))));

    if config.heuristic_fallback {
        info!("Heuristic fallback enabled for unreachable LLM");
    }

    // Initialize PostgreSQL match store (optional)
    let store: Option<Arc<dyn MatchStore>> = match &config.database_url {
        Some(url) => Some(Arc::new(PgMatchStore::new(create_pool(url).await?))),
        None => {
            warn!("DATABASE_URL not set; match results will not be stored");
            None
        }
    };

    // Build app state
    let state = AppState {
        engine,
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the frontend origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
