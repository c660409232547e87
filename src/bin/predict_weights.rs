//! One-shot weight prediction for a sample workout
//!
//! ```bash
//! predict_weights workout_weight_predictor.json
//! ```
//!
//! Loads the artifact (falling back to heuristics if it cannot be used) and
//! prints the prediction for a 45-rep olympic couplet.

use std::path::PathBuf;

use serde_json::json;
use workout_weight_api::{
    config::Config,
    logging,
    logic::{features::WorkoutFeatures, model::Predictor},
};

fn main() -> anyhow::Result<()> {
    let Some(model_path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: predict_weights <model_path>");
        std::process::exit(1);
    };

    let config = Config {
        model_path,
        ..Config::from_env()
    };
    logging::init(&config);

    let predictor = Predictor::from_path(&config.model_path);

    let example = WorkoutFeatures::from_value(&json!({
        "movement_type": "olympic",
        "total_reps": 45,
        "largest_single_set": 21,
        "time_cap_seconds": 600,
        "time_domain": "5:00 - 10:00",
        "format": "For Time",
        "total_weighted_movements": 1,
        "has_other_barbell": 0,
        "competition_level": "Open"
    }))?;

    let (male, female) = predictor.predict(&example).rounded();
    println!("Predicted weights: {}/{} lbs", male, female);

    Ok(())
}
