//! Workout descriptor parsing
//!
//! Requests carry a free-form JSON object. Only the documented keys are read;
//! anything else is ignored and absent keys stay `None` so that each consumer
//! (encoder, fallback) can apply its own default.

use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a workout record cannot be interpreted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("Workout must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid value for field {field}: expected a number, got {found}")]
    InvalidNumber {
        field: &'static str,
        found: &'static str,
    },
}

/// Parsed workout descriptor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFeatures {
    pub movement_type: Option<String>,
    pub total_reps: Option<f64>,
    pub largest_single_set: Option<f64>,
    pub time_cap_seconds: Option<f64>,
    pub time_domain: Option<String>,
    pub format: Option<String>,
    pub total_weighted_movements: Option<f64>,
    pub has_other_barbell: Option<f64>,
    pub competition_level: Option<String>,
}

impl WorkoutFeatures {
    /// Parse a JSON value into a workout descriptor
    pub fn from_value(value: &Value) -> Result<Self, FeatureError> {
        let map = value
            .as_object()
            .ok_or_else(|| FeatureError::NotAnObject(json_type(value)))?;

        Ok(Self {
            movement_type: category(map, "movement_type"),
            total_reps: number(map, "total_reps")?,
            largest_single_set: number(map, "largest_single_set")?,
            time_cap_seconds: number(map, "time_cap_seconds")?,
            time_domain: category(map, "time_domain"),
            format: category(map, "format"),
            total_weighted_movements: number(map, "total_weighted_movements")?,
            has_other_barbell: number(map, "has_other_barbell")?,
            competition_level: category(map, "competition_level"),
        })
    }

    pub fn movement_type(&self) -> Option<&str> {
        self.movement_type.as_deref()
    }
}

/// Non-string categories are treated as unrecognized, same as missing
fn category(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn number(map: &Map<String, Value>, key: &'static str) -> Result<Option<f64>, FeatureError> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(FeatureError::InvalidNumber {
            field: key,
            found: "an unrepresentable number",
        }),
        Some(other) => Err(FeatureError::InvalidNumber {
            field: key,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_record() {
        let features = WorkoutFeatures::from_value(&json!({
            "movement_type": "olympic",
            "total_reps": 45,
            "largest_single_set": 21,
            "time_cap_seconds": 600,
            "time_domain": "5:00 - 10:00",
            "format": "For Time",
            "total_weighted_movements": 1,
            "has_other_barbell": 0,
            "competition_level": "Open"
        }))
        .unwrap();

        assert_eq!(features.movement_type(), Some("olympic"));
        assert_eq!(features.total_reps, Some(45.0));
        assert_eq!(features.largest_single_set, Some(21.0));
        assert_eq!(features.time_domain.as_deref(), Some("5:00 - 10:00"));
        assert_eq!(features.competition_level.as_deref(), Some("Open"));
    }

    #[test]
    fn test_missing_and_unknown_keys() {
        let features = WorkoutFeatures::from_value(&json!({
            "movement_type": "squat",
            "coach_notes": "go heavy"
        }))
        .unwrap();

        assert_eq!(features.movement_type(), Some("squat"));
        assert_eq!(features.total_reps, None);
        assert_eq!(features.format, None);
    }

    #[test]
    fn test_booleans_become_flags() {
        let features = WorkoutFeatures::from_value(&json!({
            "has_other_barbell": true
        }))
        .unwrap();
        assert_eq!(features.has_other_barbell, Some(1.0));
    }

    #[test]
    fn test_floats_accepted() {
        let features = WorkoutFeatures::from_value(&json!({"total_reps": 30.5})).unwrap();
        assert_eq!(features.total_reps, Some(30.5));
    }

    #[test]
    fn test_non_string_category_is_unrecognized() {
        let features = WorkoutFeatures::from_value(&json!({"movement_type": 3})).unwrap();
        assert_eq!(features.movement_type, None);
    }

    #[test]
    fn test_string_number_is_malformed() {
        let err = WorkoutFeatures::from_value(&json!({"total_reps": "lots"})).unwrap_err();
        assert_eq!(
            err,
            FeatureError::InvalidNumber { field: "total_reps", found: "a string" }
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for field total_reps: expected a number, got a string"
        );
    }

    #[test]
    fn test_null_number_is_malformed() {
        let err = WorkoutFeatures::from_value(&json!({"time_cap_seconds": null})).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidNumber { field: "time_cap_seconds", .. }));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = WorkoutFeatures::from_value(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, FeatureError::NotAnObject("an array"));
    }
}
