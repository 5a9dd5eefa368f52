//! Error types for reliability analysis
//!
//! Provides a unified error type for all reliability-stats crates.

use thiserror::Error;

/// Core error type for reliability estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Not enough usable failure observations for the requested fit
    #[error("Insufficient data: at least {expected} failure points are required, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// An observation carries a non-positive or non-finite time
    #[error("Invalid observation at index {index}: time {time} must be finite and positive")]
    InvalidObservation { index: usize, time: f64 },

    /// The regression is undefined or produced non-physical parameters
    #[error("Degenerate data: {0}")]
    DegenerateData(String),

    /// A derived-metric call received an out-of-range argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Raw input could not be turned into observations
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure raised by a caller-supplied estimator or distribution
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for too few failure points
    pub fn insufficient_failures(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidArgument(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a regression whose predictor has no spread
    pub fn constant_predictor(context: &str) -> Self {
        Self::DegenerateData(format!(
            "{context}: all failure times are identical, the regression is undefined"
        ))
    }

    /// Create an error for a fitted shape that is not physically meaningful
    pub fn non_physical_shape(beta: f64) -> Self {
        Self::DegenerateData(format!(
            "fitted shape parameter {beta} is not positive; supply more varied failure data"
        ))
    }

    /// Whether the caller could succeed by supplying more or different data
    pub fn is_data_problem(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::InvalidObservation { .. } | Self::DegenerateData(_)
        )
    }
}
