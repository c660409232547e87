//! Model Artifact - Unified or paired regressors
//!
//! The shape is resolved once, when the file is parsed. A JSON object holding
//! both `male_model` and `female_model` is a paired artifact; anything else
//! must itself be a regressor and is used for both sexes.

use serde::Deserialize;
use serde_json::Value;

use super::regressor::{InferenceError, Regressor};
use crate::logic::features::EncodedVector;

/// Female weight for a unified model is the male prediction times this
pub const UNIFIED_FEMALE_SCALE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelArtifact {
    Unified(Regressor),
    Paired { male: Regressor, female: Regressor },
}

#[derive(Deserialize)]
struct PairedFile {
    male_model: Regressor,
    female_model: Regressor,
}

impl ModelArtifact {
    /// Parse artifact bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let is_paired = value
            .as_object()
            .map(|obj| obj.contains_key("male_model") && obj.contains_key("female_model"))
            .unwrap_or(false);

        if is_paired {
            let paired: PairedFile = serde_json::from_value(value)?;
            Ok(ModelArtifact::Paired {
                male: paired.male_model,
                female: paired.female_model,
            })
        } else {
            Ok(ModelArtifact::Unified(serde_json::from_value(value)?))
        }
    }

    /// Raw (male, female) for one encoded row
    pub fn infer(&self, vector: &EncodedVector) -> Result<(f64, f64), InferenceError> {
        match self {
            ModelArtifact::Unified(model) => {
                let raw = model.predict(vector)?;
                Ok((raw, raw * UNIFIED_FEMALE_SCALE))
            }
            ModelArtifact::Paired { male, female } => {
                Ok((male.predict(vector)?, female.predict(vector)?))
            }
        }
    }

    /// Name reported by the model info endpoint
    pub fn model_type(&self) -> &'static str {
        match self {
            ModelArtifact::Unified(model) => model.kind_name(),
            ModelArtifact::Paired { .. } => "paired",
        }
    }
}
