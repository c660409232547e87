//! Feature Layout - Encoded vector definition
//!
//! **This file controls the order the trained artifact expects.**
//!
//! Positions are a contract with the model file. Reordering, adding or
//! removing a slot requires retraining and re-exporting the artifact.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Request keys in the exact order their encoded values appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "movement_type",            // 0: movement category code
    "total_reps",               // 1: total reps in the piece
    "largest_single_set",       // 2: biggest unbroken set
    "time_cap_seconds",         // 3: time cap
    "time_domain",              // 4: time domain bucket code
    "format",                   // 5: workout format code
    "total_weighted_movements", // 6: number of loaded movements
    "has_other_barbell",        // 7: 0/1
    "competition_level",        // 8: competition stage code
];

/// Total number of encoded features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 9;

// ============================================================================
// API VIEW
// ============================================================================

/// Layout as owned strings, for API responses
pub fn feature_names() -> Vec<String> {
    FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
}
