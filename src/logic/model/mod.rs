//! Model Module - Weight prediction
//!
//! Artifact loading, inference and the heuristic fallback.

pub mod artifact;
pub mod fallback;
pub mod loader;
pub mod predictor;
pub mod regressor;

// Re-export common types
pub use artifact::{ModelArtifact, UNIFIED_FEMALE_SCALE};
pub use fallback::fallback;
pub use predictor::{Predictor, WeightPrediction};
pub use regressor::{InferenceError, Regressor};
