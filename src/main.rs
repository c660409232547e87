//! Workout Weight Prediction API server
//!
//! Environment: MODEL_PATH, PORT, DEBUG (plus RUST_LOG / LOG_FORMAT).

use std::net::SocketAddr;

use anyhow::Context;
use workout_weight_api::{config::Config, create_router, logging, logic::model::Predictor, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    logging::init(&config);

    tracing::info!("Starting ML Weight Prediction API on port {}", config.port);
    tracing::info!("Model path: {}", config.model_path.display());

    let predictor = Predictor::from_path(&config.model_path);
    tracing::info!("Model loaded: {}", predictor.is_loaded());

    // Build application state
    let state = AppState::new(config.clone(), predictor);

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
