//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Local wall-clock time without an offset, e.g. 2026-10-19T14:03:07.512345
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    timestamp: String,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.predictor().is_loaded(),
        timestamp: chrono::Local::now()
            .naive_local()
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    })
}
