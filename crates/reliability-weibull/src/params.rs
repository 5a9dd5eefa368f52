//! Fitted Weibull parameters

use crate::maintenance::FailurePattern;
use crate::reliability;
use reliability_core::{gamma, Error, LifetimeDistribution, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of fitting a two-parameter Weibull distribution
///
/// Immutable once built: either produced by
/// [`WeibullEstimator::fit`](crate::WeibullEstimator::fit), restored from
/// known parameters with [`FittedParameters::new`], or deserialised. Every
/// path guarantees `beta > 0` and `eta > 0`, and derives `mtbf` from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredParameters")]
pub struct FittedParameters {
    beta: f64,
    eta: f64,
    r2: Option<f64>,
    mtbf: f64,
    failures: usize,
    suspensions: usize,
}

/// Wire form of [`FittedParameters`]; any stored `mtbf` is recomputed
#[derive(Deserialize)]
struct StoredParameters {
    beta: f64,
    eta: f64,
    #[serde(default)]
    r2: Option<f64>,
    #[serde(default)]
    failures: usize,
    #[serde(default)]
    suspensions: usize,
}

impl TryFrom<StoredParameters> for FittedParameters {
    type Error = Error;

    fn try_from(stored: StoredParameters) -> Result<Self> {
        let mut params = FittedParameters::new(stored.beta, stored.eta)?;
        if let Some(r2) = stored.r2 {
            if !r2.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "goodness of fit r2 must be finite, got {r2}"
                )));
            }
        }
        params.r2 = stored.r2;
        params.failures = stored.failures;
        params.suspensions = stored.suspensions;
        Ok(params)
    }
}

impl FittedParameters {
    /// Build parameters from a known shape and scale
    ///
    /// The MTBF is derived as `eta · Γ(1 + 1/beta)`. No sample backs these
    /// parameters, so `r2` is absent and the counts are zero.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `beta` or `eta` is not finite and
    /// positive.
    pub fn new(beta: f64, eta: f64) -> Result<Self> {
        if !(beta.is_finite() && beta > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "shape parameter beta must be finite and positive, got {beta}"
            )));
        }
        if !(eta.is_finite() && eta > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "scale parameter eta must be finite and positive, got {eta}"
            )));
        }
        Ok(Self::assemble(beta, eta, None, 0, 0))
    }

    /// Assemble a fit result; the caller has already checked the parameters
    pub(crate) fn from_fit(beta: f64, eta: f64, r2: f64, failures: usize, suspensions: usize) -> Self {
        Self::assemble(beta, eta, Some(r2), failures, suspensions)
    }

    fn assemble(beta: f64, eta: f64, r2: Option<f64>, failures: usize, suspensions: usize) -> Self {
        Self {
            beta,
            eta,
            r2,
            mtbf: eta * gamma(1.0 + 1.0 / beta),
            failures,
            suspensions,
        }
    }

    /// Shape parameter β (dimensionless)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Scale parameter η (characteristic life, in input time units)
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Coefficient of determination of the probability-plot regression
    ///
    /// `None` for parameters that did not come from a fit.
    pub fn r2(&self) -> Option<f64> {
        self.r2
    }

    /// Mean time between failures, `eta · Γ(1 + 1/beta)`
    pub fn mtbf(&self) -> f64 {
        self.mtbf
    }

    /// Number of failure observations regressed
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Number of suspensions supplied but excluded from the regression
    pub fn suspensions(&self) -> usize {
        self.suspensions
    }

    /// Failure pattern implied by the shape parameter
    pub fn failure_pattern(&self, tolerance: f64) -> FailurePattern {
        FailurePattern::classify(self.beta, tolerance)
    }
}

impl LifetimeDistribution for FittedParameters {
    fn reliability(&self, t: f64) -> f64 {
        reliability::reliability(self, t)
    }

    fn failure_rate(&self, t: f64) -> f64 {
        reliability::failure_rate(self, t)
    }

    fn quantile_unchecked(&self, p: f64) -> f64 {
        self.eta * (-(1.0 - p).ln()).powf(1.0 / self.beta)
    }

    fn mean_life(&self) -> f64 {
        self.mtbf
    }
}

impl fmt::Display for FittedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weibull {{ beta: {:.4}, eta: {:.4}, ", self.beta, self.eta)?;
        match self.r2 {
            Some(r2) => write!(f, "r2: {r2:.4}, ")?,
            None => write!(f, "r2: n/a, ")?,
        }
        write!(f, "mtbf: {:.4} }}", self.mtbf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_mtbf_equals_eta() {
        let params = FittedParameters::new(1.0, 50.0).unwrap();
        assert_relative_eq!(params.mtbf(), 50.0, max_relative = 1e-10);
        assert_eq!(params.failures(), 0);
        assert_eq!(params.r2(), None);
    }

    #[test]
    fn test_rayleigh_mtbf() {
        // beta = 2: MTBF = eta·√π/2
        let params = FittedParameters::new(2.0, 100.0).unwrap();
        assert_relative_eq!(
            params.mtbf(),
            100.0 * std::f64::consts::PI.sqrt() / 2.0,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(FittedParameters::new(0.0, 10.0).is_err());
        assert!(FittedParameters::new(-1.0, 10.0).is_err());
        assert!(FittedParameters::new(1.5, 0.0).is_err());
        assert!(FittedParameters::new(1.5, f64::INFINITY).is_err());
        assert!(FittedParameters::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_distribution_trait() {
        let params = FittedParameters::new(2.0, 100.0).unwrap();
        assert_relative_eq!(params.quantile(1.0 - (-1.0f64).exp()).unwrap(), 100.0, max_relative = 1e-10);
        assert!(params.quantile(1.0).is_err());
        assert_eq!(params.mean_life(), params.mtbf());
    }

    #[test]
    fn test_display() {
        let fitted = FittedParameters::from_fit(1.5, 200.0, 0.98, 5, 0);
        assert!(fitted
            .to_string()
            .starts_with("Weibull { beta: 1.5000, eta: 200.0000, r2: 0.9800"));

        let known = FittedParameters::new(1.5, 200.0).unwrap();
        assert!(known.to_string().contains("r2: n/a"));
    }

    #[test]
    fn test_deserialize_validates_and_recomputes_mtbf() {
        let json = r#"{"beta":2.0,"eta":100.0,"r2":0.97,"mtbf":12345.0,"failures":8,"suspensions":2}"#;
        let params: FittedParameters = serde_json::from_str(json).unwrap();
        assert_relative_eq!(
            params.mtbf(),
            100.0 * std::f64::consts::PI.sqrt() / 2.0,
            max_relative = 1e-10
        );
        assert_eq!(params.r2(), Some(0.97));
        assert_eq!(params.failures(), 8);
        assert_eq!(params.suspensions(), 2);

        let known: FittedParameters = serde_json::from_str(r#"{"beta":1.0,"eta":40.0}"#).unwrap();
        assert_eq!(known.r2(), None);
        assert_relative_eq!(known.mtbf(), 40.0, max_relative = 1e-10);
    }

    #[test]
    fn test_deserialize_rejects_non_physical_parameters() {
        for json in [
            r#"{"beta":-2.0,"eta":100.0,"r2":1.0,"mtbf":12345.0,"failures":5,"suspensions":0}"#,
            r#"{"beta":0.0,"eta":100.0}"#,
            r#"{"beta":2.0,"eta":0.0}"#,
            r#"{"beta":2.0,"eta":-5.0,"r2":0.9}"#,
        ] {
            let err = serde_json::from_str::<FittedParameters>(json).unwrap_err();
            assert!(err.to_string().contains("must be finite and positive"), "{json}: {err}");
        }
    }

    #[test]
    fn test_serialize_round_trip_keeps_fit_quality() {
        let fitted = FittedParameters::from_fit(1.7, 320.0, 0.99, 6, 1);
        let json = serde_json::to_string(&fitted).unwrap();
        let back: FittedParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.r2(), Some(0.99));
        assert_eq!(back.failures(), 6);
        assert_relative_eq!(back.mtbf(), fitted.mtbf(), max_relative = 1e-12);
    }
}
