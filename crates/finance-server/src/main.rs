//! Finance Tips HTTP Server
//!
//! Axum server that accepts a household's monthly figures as JSON and
//! returns rule-based observations plus one Groq-generated tip.

mod config;
mod handlers;
mod state;


use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finance_advisor::AdviceRequester;
use llm_runtime::{GroqConfig, GroqProvider, LlmProvider};

use crate::config::{prompt_for_api_key, resolve_api_key, ServerConfig};
use crate::handlers::{analyze_handler, health_check, insights_handler, list_categories};
use crate::state::AppState;

/// Build the router over a ready application state
fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/categories", get(list_categories))
        .route("/api/insights", post(insights_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    // No credential, no service
    let api_key = resolve_api_key(std::env::var("GROQ_API_KEY").ok(), prompt_for_api_key)?;
    let groq_config = GroqConfig::from_lookup(|name| {
        if name == "GROQ_API_KEY" {
            Some(api_key.clone())
        } else {
            std::env::var(name).ok()
        }
    })?;

    let provider: Arc<dyn LlmProvider> = Arc::new(GroqProvider::new(groq_config)?);

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ Connected to {}", provider.name()),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not reachable - tips will fall back to a generic one", provider.name());
            tracing::warn!("  Check GROQ_API_KEY and your internet connection");
        }
    }

    let requester = AdviceRequester::new(provider).with_model(config.model.clone());
    let state = AppState::new(requester);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("💰 finance tips server running on http://{}", config.bind_addr);
    tracing::info!("   model: {}", config.model);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /api/categories  - Default expense categories");
    tracing::info!("  POST /api/insights    - Rule-based insights");
    tracing::info!("  POST /api/analyze     - Insights plus AI tip");
    tracing::info!("");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
