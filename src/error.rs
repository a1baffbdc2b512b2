// Typed errors with thiserror. Surface meaningful messages to JS.

use thiserror::Error;

/// Estimator error types.
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// The dimension string has fewer than two values.
    #[error("invalid dimension format: expected two values like \"3x4\" or \"3 4\"")]
    BadFormat,

    /// A dimension token carries no numeric value.
    #[error("dimension value is not numeric")]
    NotNumeric,

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        EstimatorError::Serialization(err.to_string())
    }
}
