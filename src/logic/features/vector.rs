//! Encoded Vector - Model input
//!
//! Maps a [`WorkoutFeatures`] record onto the fixed numeric layout from
//! `layout.rs`. Categories go through static lookup tables; unknown or
//! missing values take the table default. Encoding never fails.

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use super::workout::WorkoutFeatures;

// ============================================================================
// CATEGORY TABLES
// ============================================================================

pub const MOVEMENT_TYPES: &[(&str, f64)] = &[
    ("olympic", 0.0),
    ("squat", 1.0),
    ("strength", 2.0),
    ("dumbbell", 3.0),
    ("pressing", 4.0),
    ("other", 5.0),
];
pub const DEFAULT_MOVEMENT_CODE: f64 = 5.0;

pub const COMPETITION_LEVELS: &[(&str, f64)] = &[
    ("Open", 0.0),
    ("Quarterfinals", 1.0),
    ("Semifinals", 2.0),
];
pub const DEFAULT_COMPETITION_CODE: f64 = 0.0;

pub const TIME_DOMAINS: &[(&str, f64)] = &[
    ("1:00 - 5:00", 0.0),
    ("5:00 - 10:00", 1.0),
    ("10:00 - 15:00", 2.0),
    ("15:00 - 20:00", 3.0),
    ("20:00+", 4.0),
];
pub const DEFAULT_TIME_DOMAIN_CODE: f64 = 1.0;

pub const FORMATS: &[(&str, f64)] = &[
    ("For Time", 0.0),
    ("AMRAP", 1.0),
    ("Rounds For Time", 2.0),
    ("Ladder", 3.0),
];
pub const DEFAULT_FORMAT_CODE: f64 = 0.0;

// Numeric defaults
pub const DEFAULT_TOTAL_REPS: f64 = 0.0;
pub const DEFAULT_LARGEST_SINGLE_SET: f64 = 0.0;
pub const DEFAULT_TIME_CAP_SECONDS: f64 = 600.0;
pub const DEFAULT_TOTAL_WEIGHTED_MOVEMENTS: f64 = 1.0;
pub const DEFAULT_HAS_OTHER_BARBELL: f64 = 0.0;

/// Exact, case-sensitive table lookup
pub fn lookup(table: &[(&str, f64)], key: Option<&str>, default: f64) -> f64 {
    key.and_then(|k| table.iter().find(|(name, _)| *name == k))
        .map(|(_, code)| *code)
        .unwrap_or(default)
}

// ============================================================================
// ENCODED VECTOR
// ============================================================================

/// Numeric model input in FEATURE_LAYOUT order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedVector {
    values: [f64; FEATURE_COUNT],
}

impl EncodedVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Named values for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, v)| (name.to_string(), serde_json::json!(v)))
            .collect();
        serde_json::Value::Object(named)
    }
}

/// Encode a workout into the model's input vector
pub fn encode(features: &WorkoutFeatures) -> EncodedVector {
    EncodedVector::from_values([
        lookup(MOVEMENT_TYPES, features.movement_type.as_deref(), DEFAULT_MOVEMENT_CODE),
        features.total_reps.unwrap_or(DEFAULT_TOTAL_REPS),
        features.largest_single_set.unwrap_or(DEFAULT_LARGEST_SINGLE_SET),
        features.time_cap_seconds.unwrap_or(DEFAULT_TIME_CAP_SECONDS),
        lookup(TIME_DOMAINS, features.time_domain.as_deref(), DEFAULT_TIME_DOMAIN_CODE),
        lookup(FORMATS, features.format.as_deref(), DEFAULT_FORMAT_CODE),
        features.total_weighted_movements.unwrap_or(DEFAULT_TOTAL_WEIGHTED_MOVEMENTS),
        features.has_other_barbell.unwrap_or(DEFAULT_HAS_OTHER_BARBELL),
        lookup(COMPETITION_LEVELS, features.competition_level.as_deref(), DEFAULT_COMPETITION_CODE),
    ])
}
