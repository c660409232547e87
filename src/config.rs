//! Configuration module

use std::env;
use std::path::PathBuf;

/// Default artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "workout_weight_predictor.json";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the serialized model artifact
    pub model_path: PathBuf,

    /// Server port
    pub port: u16,

    /// Debug mode (verbose logging)
    pub debug: bool,

    /// Emit log lines as JSON
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            debug: env::var("DEBUG")
                .map(|d| parse_flag(&d))
                .unwrap_or(false),

            json_logs: env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Config pointing at an explicit artifact, everything else default
    pub fn with_model_path(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            port: DEFAULT_PORT,
            debug: false,
            json_logs: false,
        }
    }

    /// Model path as reported over the API
    pub fn model_path_display(&self) -> String {
        self.model_path.display().to_string()
    }

    /// Filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "workout_weight_api=debug,predict_weights=debug,tower_http=debug"
        } else {
            "workout_weight_api=info,predict_weights=info,tower_http=info"
        }
    }
}

/// Only a literal "true" (any case) turns a flag on
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
