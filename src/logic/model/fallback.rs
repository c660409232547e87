//! Fallback Estimator - heuristic weights without a model
//!
//! Base (male, female) load per movement category, scaled down as the rep
//! count climbs. Used whenever no artifact is loaded or inference fails.

use crate::logic::features::WorkoutFeatures;

/// (male, female) base loads in lbs
pub const BASE_WEIGHTS: &[(&str, (f64, f64))] = &[
    ("olympic", (135.0, 95.0)),
    ("squat", (115.0, 75.0)),
    ("strength", (185.0, 125.0)),
    ("dumbbell", (50.0, 35.0)),
    ("pressing", (95.0, 65.0)),
    ("other", (100.0, 70.0)),
];

pub const DEFAULT_BASE_WEIGHT: (f64, f64) = (100.0, 70.0);

/// Rep count assumed when the record has none
/// (the encoder uses 0; the two defaults are independent)
pub const DEFAULT_FALLBACK_REPS: f64 = 25.0;

/// (threshold, multiplier), checked top-down with a strict `>`
const REP_TIERS: &[(f64, f64)] = &[(100.0, 0.7), (50.0, 0.8), (25.0, 0.9)];

pub fn base_weights(movement_type: Option<&str>) -> (f64, f64) {
    movement_type
        .and_then(|m| BASE_WEIGHTS.iter().find(|(name, _)| *name == m))
        .map(|(_, weights)| *weights)
        .unwrap_or(DEFAULT_BASE_WEIGHT)
}

pub fn rep_multiplier(total_reps: f64) -> f64 {
    REP_TIERS
        .iter()
        .find(|(threshold, _)| total_reps > *threshold)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Heuristic (male, female) prediction
pub fn fallback(features: &WorkoutFeatures) -> (f64, f64) {
    let (male_base, female_base) = base_weights(features.movement_type());
    let multiplier = rep_multiplier(features.total_reps.unwrap_or(DEFAULT_FALLBACK_REPS));
    (male_base * multiplier, female_base * multiplier)
}
