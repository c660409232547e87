//! Prediction handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::logic::features::WorkoutFeatures;
use crate::logic::model::Predictor;
use crate::{AppError, AppResult, AppState};

/// Keys `/predict` insists on, checked in this order
pub const REQUIRED_FIELDS: [&str; 3] = ["movement_type", "total_reps", "largest_single_set"];

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub male_weight: i64,
    pub female_weight: i64,
    pub model_used: bool,
    pub features: Value,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Success {
        index: usize,
        male_weight: i64,
        female_weight: i64,
        model_used: bool,
        features: Value,
    },
    Failure {
        index: usize,
        error: String,
        model_used: bool,
    },
}

impl BatchItem {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchItem::Success { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub total_processed: usize,
    pub successful: usize,
}

/// Predict weights for a single workout
pub async fn single(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(data) = payload?;

    let fields = match data.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(AppError::ValidationError("No data provided".to_string())),
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(AppError::ValidationError(format!("Missing required field: {}", missing)));
    }

    let features = WorkoutFeatures::from_value(&data)?;
    let prediction = state.predictor().predict(&features);
    let (male_weight, female_weight) = prediction.rounded();

    Ok(Json(PredictResponse {
        male_weight,
        female_weight,
        model_used: prediction.model_used,
        features: data,
    }))
}

/// Predict weights for multiple workouts (for training blocks)
pub async fn batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<BatchResponse>> {
    let Json(mut data) = payload?;

    let workouts = match data.get_mut("workouts") {
        Some(Value::Array(items)) => std::mem::take(items),
        Some(_) => return Err(AppError::ValidationError("Workouts must be an array".to_string())),
        None => return Err(AppError::ValidationError("No workouts array provided".to_string())),
    };

    // One snapshot for the whole batch
    let predictor = state.predictor();
    let results: Vec<BatchItem> = workouts
        .into_iter()
        .enumerate()
        .map(|(index, workout)| predict_item(&predictor, index, workout))
        .collect();

    let successful = results.iter().filter(|r| r.is_success()).count();
    tracing::debug!(total = results.len(), successful, "Batch prediction finished");

    Ok(Json(BatchResponse {
        total_processed: results.len(),
        successful,
        results,
    }))
}

fn predict_item(predictor: &Predictor, index: usize, workout: Value) -> BatchItem {
    match WorkoutFeatures::from_value(&workout) {
        Ok(features) => {
            let prediction = predictor.predict(&features);
            let (male_weight, female_weight) = prediction.rounded();
            BatchItem::Success {
                index,
                male_weight,
                female_weight,
                model_used: prediction.model_used,
                features: workout,
            }
        }
        Err(e) => {
            tracing::error!("Error processing workout {}: {}", index, e);
            BatchItem::Failure {
                index,
                error: e.to_string(),
                model_used: false,
            }
        }
    }
}
