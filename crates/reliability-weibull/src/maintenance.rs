//! Failure pattern classification and preventive maintenance intervals

use crate::config::DEFAULT_RANDOM_TOLERANCE;
use crate::params::FittedParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure regime implied by the Weibull shape parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePattern {
    /// Decreasing failure rate (infant mortality), `beta < 1`
    EarlyLife,
    /// Constant failure rate, `beta ≈ 1`
    Random,
    /// Increasing failure rate, `beta > 1`
    WearOut,
}

impl FailurePattern {
    /// Classify a shape parameter
    ///
    /// Shapes within `tolerance` of 1 (exclusive), or exactly 1, count as
    /// random.
    pub fn classify(beta: f64, tolerance: f64) -> Self {
        if beta == 1.0 || (beta - 1.0).abs() < tolerance {
            FailurePattern::Random
        } else if beta < 1.0 {
            FailurePattern::EarlyLife
        } else {
            FailurePattern::WearOut
        }
    }

    /// Short label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            FailurePattern::EarlyLife => "early-life",
            FailurePattern::Random => "random",
            FailurePattern::WearOut => "wear-out",
        }
    }

    /// One-line description of the regime
    pub fn description(&self) -> &'static str {
        match self {
            FailurePattern::EarlyLife => {
                "decreasing failure rate; failures concentrate early in life (infant mortality)"
            }
            FailurePattern::Random => "constant failure rate; failures occur independently of age",
            FailurePattern::WearOut => "increasing failure rate; failures become likelier with age",
        }
    }
}

impl fmt::Display for FailurePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preventive maintenance advice for a fitted distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecommendation {
    /// Suggested age-based replacement interval; `None` means run to failure
    pub interval: Option<f64>,
    /// Human-readable justification
    pub reason: String,
    /// Failure regime the advice was derived from
    pub pattern: FailurePattern,
}

impl MaintenanceRecommendation {
    pub fn is_run_to_failure(&self) -> bool {
        self.interval.is_none()
    }
}

/// Recommend a preventive maintenance interval
///
/// Age-based maintenance only pays off when the hazard increases, so any
/// `beta ≤ 1` yields no interval. Otherwise the interval is
/// `eta · (1 − (1/beta)^(1/beta))`. The attached pattern uses the default
/// random-failure tolerance.
pub fn recommended_interval(params: &FittedParameters) -> MaintenanceRecommendation {
    recommended_interval_with_tolerance(params, DEFAULT_RANDOM_TOLERANCE)
}

/// [`recommended_interval`] classifying the pattern with `tolerance`
///
/// The interval rule does not depend on `tolerance`: a shape just above 1
/// can be classed random and still get an interval.
pub fn recommended_interval_with_tolerance(
    params: &FittedParameters,
    tolerance: f64,
) -> MaintenanceRecommendation {
    let (beta, eta) = (params.beta(), params.eta());
    let pattern = params.failure_pattern(tolerance);

    if beta <= 1.0 {
        return MaintenanceRecommendation {
            interval: None,
            reason: format!(
                "Shape parameter {beta:.2} ({pattern}) indicates a constant or decreasing \
                 failure rate; preventive maintenance is not effective, run to failure and \
                 focus on condition monitoring or eliminating early-life defects"
            ),
            pattern,
        };
    }

    let interval = eta * (1.0 - (1.0 / beta).powf(1.0 / beta));
    MaintenanceRecommendation {
        interval: Some(interval),
        reason: format!(
            "Shape parameter {beta:.2} ({pattern}) indicates an increasing failure rate; \
             replace or overhaul every {interval:.1} time units, before wear-out sets in"
        ),
        pattern,
    }
}
