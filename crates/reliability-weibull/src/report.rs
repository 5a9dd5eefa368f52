//! One-call Weibull analysis bundling the fit and its derived metrics

use crate::estimator::WeibullEstimator;
use crate::maintenance::{recommended_interval_with_tolerance, FailurePattern, MaintenanceRecommendation};
use crate::observation::Observation;
use crate::params::FittedParameters;
use crate::reliability::BLifeValues;
use reliability_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Everything a caller usually displays after fitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeibullReport {
    pub parameters: FittedParameters,
    pub b_life: BLifeValues,
    pub pattern: FailurePattern,
    pub recommendation: MaintenanceRecommendation,
}

impl WeibullReport {
    /// Derive the report from already fitted parameters
    pub fn from_parameters(parameters: FittedParameters, random_tolerance: f64) -> Self {
        Self {
            b_life: BLifeValues::from_params(&parameters),
            pattern: parameters.failure_pattern(random_tolerance),
            recommendation: recommended_interval_with_tolerance(&parameters, random_tolerance),
            parameters,
        }
    }
}

impl fmt::Display for WeibullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weibull Analysis:")?;
        writeln!(f, "  Shape (beta): {:.4}", self.parameters.beta())?;
        writeln!(f, "  Scale (eta): {:.4}", self.parameters.eta())?;
        if let Some(r2) = self.parameters.r2() {
            writeln!(f, "  R-squared: {r2:.4}")?;
        }
        writeln!(f, "  MTBF: {:.4}", self.parameters.mtbf())?;
        writeln!(
            f,
            "  Failures used: {} (suspensions excluded: {})",
            self.parameters.failures(),
            self.parameters.suspensions()
        )?;
        writeln!(f, "  {}", self.b_life)?;
        writeln!(f, "  Pattern: {} ({})", self.pattern, self.pattern.description())?;
        match self.recommendation.interval {
            Some(interval) => writeln!(f, "  Recommended interval: {interval:.2}")?,
            None => writeln!(f, "  Recommended interval: none (run to failure)")?,
        }
        writeln!(f, "  {}", self.recommendation.reason)
    }
}

impl WeibullEstimator {
    /// Fit and derive B-life, failure pattern and maintenance advice
    #[instrument(skip(self, observations), fields(n_observations = observations.len()))]
    pub fn analyze(&self, observations: &[Observation]) -> Result<WeibullReport> {
        let parameters = self.fit(observations)?;
        Ok(WeibullReport::from_parameters(
            parameters,
            self.config().random_tolerance,
        ))
    }
}

/// Analyse with the default configuration
pub fn analyze(observations: &[Observation]) -> Result<WeibullReport> {
    WeibullEstimator::new().analyze(observations)
}
