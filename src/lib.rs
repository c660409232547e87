//! Workout Weight Prediction API
//!
//! Recommends barbell/dumbbell loads (male and female) for a workout
//! prescription.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  WORKOUT WEIGHT API                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────────┐   ┌──────────────────┐  │
//! │  │  Router   │──▶│   Predictor    │──▶│ Feature Encoder  │  │
//! │  │  (Axum)   │   │ (Arc snapshot) │   └────────┬─────────┘  │
//! │  └─────┬─────┘   └───────┬────────┘            ▼           │
//! │        │                 │ on failure   ┌──────────────┐   │
//! │        │ reload          └─────────────▶│   Fallback   │   │
//! │        ▼                                └──────────────┘   │
//! │  ┌───────────┐                                              │
//! │  │  Loader   │  JSON artifact (unified / paired)            │
//! │  └───────────┘                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod logic;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use logic::model::Predictor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    predictor: Arc<RwLock<Arc<Predictor>>>,
}

impl AppState {
    pub fn new(config: config::Config, predictor: Predictor) -> Self {
        Self {
            config,
            predictor: Arc::new(RwLock::new(Arc::new(predictor))),
        }
    }

    /// Current predictor; callers keep this snapshot for the whole request
    pub fn predictor(&self) -> Arc<Predictor> {
        self.predictor.read().clone()
    }

    /// Swap in a freshly built predictor, whatever its load outcome
    pub fn replace_predictor(&self, predictor: Predictor) {
        *self.predictor.write() = Arc::new(predictor);
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::single))
        .route("/predict/batch", post(handlers::predict::batch))
        .route("/model/reload", post(handlers::model::reload))
        .route("/model/info", get(handlers::model::info))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin)
        )
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::InternalError(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let response = handle_panic(Box::new("boom: secret detail"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_string_panic_payload_not_leaked() {
        let response = handle_panic(Box::new(String::from("index out of bounds")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains("index out of bounds"));
    }
}
