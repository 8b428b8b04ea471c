//! Axum-based gateway for the ECO Matrix assistant. Config-driven via CoreConfig.

mod error;
mod handlers;

use axum::extract::State;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use eco_core::{CoreConfig, Responder};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads and the port is available.
fn run_verify() -> Result<(), String> {
    print!("Checking config... ");
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("OK ({})", config.app_name);

    let addr = config.bind_address();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    println!("\nSUCCESS: Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[eco-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let responder = Arc::new(Responder::from_config(&config));
    if config.phrase_seed.is_some() {
        tracing::info!("Seeded phrase selection enabled");
    }

    let app = build_app(AppState {
        config: Arc::clone(&config),
        responder,
    });

    let addr = config.bind_address();
    tracing::info!("{} listening on {}", config.app_name, addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    // The widget is embedded on the marketing site, which is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/clear", post(handlers::chat::clear))
        .route("/api/v1/health", get(health))
        .route("/v1/status", get(status))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) responder: Arc<Responder>,
}

/// GET /api/v1/health – liveness check for the site and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – assistant identity, topics and knowledge categories.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let topics: Vec<&str> = state
        .responder
        .topic_catalog()
        .topics()
        .iter()
        .map(|t| t.label())
        .collect();
    let categories: Vec<&str> = state
        .responder
        .knowledge()
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "topics": topics,
        "knowledge_categories": categories,
    }))
}
