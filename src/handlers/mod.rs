//! HTTP handlers

pub mod health;
pub mod model;
pub mod predict;


use crate::AppError;

/// Catch-all for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
