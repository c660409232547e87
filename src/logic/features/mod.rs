//! Features Module - Workout encoding
//!
//! Parses free-form workout records and turns them into the fixed-order
//! numeric vector the trained model was fitted on.

pub mod layout;
pub mod vector;
pub mod workout;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::{encode, EncodedVector};
pub use workout::{FeatureError, WorkoutFeatures};
