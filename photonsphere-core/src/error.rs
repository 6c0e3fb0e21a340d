//! Error types shared by the core and compute crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotonError {
    #[error("Impact parameter must be positive and finite, got {0}")]
    InvalidImpactParameter(f64),

    #[error(
        "Ray with impact parameter {impact_parameter} cannot be classified as {class} \
         (critical impact parameter is {critical})"
    )]
    ClassificationMismatch {
        impact_parameter: f64,
        critical: f64,
        class: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
}
