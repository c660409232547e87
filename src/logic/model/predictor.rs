//! Predictor - model first, heuristic on any failure
//!
//! A `Predictor` is immutable once built. Reloading builds a new one and
//! swaps it in (see `AppState`), so a request keeps whatever artifact it
//! started with.

use std::path::Path;

use super::artifact::ModelArtifact;
use super::fallback::fallback;
use super::loader;
use crate::logic::features::{encode, WorkoutFeatures};

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPrediction {
    pub male: f64,
    pub female: f64,
    /// True only when the weights came from the artifact
    pub model_used: bool,
}

impl WeightPrediction {
    fn from_fallback((male, female): (f64, f64)) -> Self {
        Self { male, female, model_used: false }
    }

    /// Integer weights for the API (half-to-even, like the training tooling)
    pub fn rounded(&self) -> (i64, i64) {
        (round_weight(self.male), round_weight(self.female))
    }
}

pub fn round_weight(weight: f64) -> i64 {
    weight.round_ties_even() as i64
}

#[derive(Debug, Clone, Default)]
pub struct Predictor {
    artifact: Option<ModelArtifact>,
}

impl Predictor {
    pub fn new(artifact: Option<ModelArtifact>) -> Self {
        Self { artifact }
    }

    /// Load from disk; an unusable file yields a fallback-only predictor
    pub fn from_path(path: &Path) -> Self {
        Self::new(loader::load(path))
    }

    pub fn is_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn artifact(&self) -> Option<&ModelArtifact> {
        self.artifact.as_ref()
    }

    /// Auto predict: model if loaded, fallback otherwise
    pub fn predict(&self, features: &WorkoutFeatures) -> WeightPrediction {
        let Some(artifact) = self.artifact.as_ref() else {
            tracing::warn!("Model not loaded, using fallback prediction");
            return WeightPrediction::from_fallback(fallback(features));
        };

        let vector = encode(features);
        tracing::debug!(features = %vector.to_log_entry(), "Encoded workout");

        match artifact.infer(&vector) {
            Ok((male, female)) => WeightPrediction {
                male: male.max(0.0),
                female: female.max(0.0),
                model_used: true,
            },
            Err(e) => {
                tracing::error!("Prediction error: {}", e);
                WeightPrediction::from_fallback(fallback(features))
            }
        }
    }
}
