//! Model lifecycle handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::features::layout::feature_names;
use crate::logic::model::{loader, Predictor};
use crate::{AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub model_path: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ModelInfo {
    Loaded {
        model_loaded: bool,
        model_path: String,
        model_type: &'static str,
        features: Vec<String>,
    },
    Missing {
        model_loaded: bool,
        model_path: String,
        error: &'static str,
    },
}

/// Reload the model; a failed load leaves the service on heuristics
pub async fn reload(State(state): State<AppState>) -> AppResult<Json<ReloadResponse>> {
    let path = state.config.model_path.clone();
    let artifact = tokio::task::spawn_blocking(move || loader::load(&path)).await?;

    let predictor = Predictor::new(artifact);
    let model_loaded = predictor.is_loaded();
    state.replace_predictor(predictor);

    tracing::info!(model_loaded, "Model reloaded");

    Ok(Json(ReloadResponse {
        status: "success",
        model_loaded,
        model_path: state.config.model_path_display(),
    }))
}

/// Describe the loaded model
pub async fn info(State(state): State<AppState>) -> Json<ModelInfo> {
    let predictor = state.predictor();
    let model_path = state.config.model_path_display();

    let info = match predictor.artifact() {
        Some(artifact) => ModelInfo::Loaded {
            model_loaded: true,
            model_path,
            model_type: artifact.model_type(),
            features: feature_names(),
        },
        None => ModelInfo::Missing {
            model_loaded: false,
            model_path,
            error: "Model not loaded",
        },
    };

    Json(info)
}
