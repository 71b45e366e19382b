//! Portfolio advisor HTTP server
//!
//! Axum server hosting the bot's fulfillment hook. The bot platform posts
//! each intent event to `/fulfill` and receives the dialog action back.

mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_advisor::{AdvisorConfig, registry};

use crate::handlers::{fulfill, health_check};
use crate::state::AppState;

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

    let config = AdvisorConfig::from_env()?;
    tracing::info!(
        min_age = config.min_age,
        max_age = config.max_age,
        min_investment = %config.min_investment,
        "Eligibility rules loaded"
    );

    let registry = registry(config);
    tracing::info!("Registered {} intents:", registry.len());
    for name in registry.names() {
        tracing::info!("  • {}", name);
    }

    let app = router(AppState::new(registry));

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("portfolio advisor listening on http://{}", addr);
    tracing::info!("  GET  /health   - Health check");
    tracing::info!("  POST /fulfill  - Bot fulfillment hook");

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/fulfill", post(fulfill))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
