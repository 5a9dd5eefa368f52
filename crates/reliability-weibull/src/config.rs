//! Configuration types for Weibull analysis

use reliability_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fewest failures median rank regression can fit a line through
pub const MIN_FAILURES: usize = 2;

/// Default half-width of the band around `beta = 1` treated as random failures
pub const DEFAULT_RANDOM_TOLERANCE: f64 = 0.05;

/// Parameters controlling the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Minimum number of failure observations required to fit
    pub min_failures: usize,

    /// Half-width of the band around `beta = 1` classified as random failures
    pub random_tolerance: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_failures: MIN_FAILURES,
            random_tolerance: DEFAULT_RANDOM_TOLERANCE,
        }
    }
}

impl EstimatorConfig {
    /// Require at least `min_failures` failures (never fewer than two)
    pub fn with_min_failures(mut self, min_failures: usize) -> Self {
        self.min_failures = min_failures;
        self
    }

    /// Set the tolerance used for failure pattern classification
    pub fn with_random_tolerance(mut self, tolerance: f64) -> Self {
        self.random_tolerance = tolerance;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.min_failures < MIN_FAILURES {
            return Err(Error::InvalidArgument(format!(
                "min_failures must be at least {MIN_FAILURES}, got {}",
                self.min_failures
            )));
        }
        if !(self.random_tolerance.is_finite() && self.random_tolerance >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "random_tolerance must be finite and non-negative, got {}",
                self.random_tolerance
            )));
        }
        Ok(())
    }
}

/// Sampling of reliability, cumulative failure and failure-rate curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Number of intervals the horizon is divided into
    pub steps: usize,

    /// Default horizon as a multiple of the scale parameter
    pub horizon_factor: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            horizon_factor: 2.5,
        }
    }
}

impl CurveConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_horizon_factor(mut self, factor: f64) -> Self {
        self.horizon_factor = factor;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(Error::InvalidArgument(
                "curve steps must be at least 1".to_string(),
            ));
        }
        if !(self.horizon_factor.is_finite() && self.horizon_factor > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "horizon_factor must be finite and positive, got {}",
                self.horizon_factor
            )));
        }
        Ok(())
    }
}
