use std::sync::Arc;

use axum::http::Method;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ai::gemini::GeminiClient;
use crate::ai::AdviceService;
use crate::config::Config;
use crate::domain::{seed, SummaryService, TransactionService, TransactionStore};
use crate::rest::AppState;
use crate::storage::CatalogClient;

mod ai;
mod config;
mod domain;
mod rest;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(RwLock::new(TransactionStore::with_transactions(
        seed::demo_transactions(),
    )));
    let advice: Arc<dyn AdviceService> = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let state = AppState {
        transactions: TransactionService::new(store),
        summary: SummaryService::new(advice.clone()),
        advice,
        catalog: config.connector_url.clone().map(CatalogClient::new),
    };

    // CORS so the SPA can call the API from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let app = rest::router(state).layer(cors);

    info!("Starting server on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
