//! Reliability metrics derived from fitted Weibull parameters
//!
//! With shape β and scale η:
//!
//! ```text
//! R(t) = exp(-(t/η)^β)
//! F(t) = 1 - R(t)
//! h(t) = (β/η)·(t/η)^(β-1)
//! t_p  = η·(-ln(1 - p))^(1/β)
//! ```

use crate::params::FittedParameters;
use reliability_core::{LifetimeDistribution, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reliability (survival probability) at time `t`
///
/// `R(0) = 1`; times at or below zero are treated as zero.
pub fn reliability(params: &FittedParameters, t: f64) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    (-(t / params.eta()).powf(params.beta())).exp()
}

/// Cumulative failure probability `F(t) = 1 − R(t)`
pub fn cumulative_failure_probability(params: &FittedParameters, t: f64) -> f64 {
    1.0 - reliability(params, t)
}

/// Failure rate (hazard) at time `t`
///
/// At `t = 0` this is the limit of the hazard: infinite for `beta < 1`,
/// `1/eta` for `beta = 1` and zero for `beta > 1`. Negative times give zero.
pub fn failure_rate(params: &FittedParameters, t: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    let (beta, eta) = (params.beta(), params.eta());
    (beta / eta) * (t / eta).powf(beta - 1.0)
}

/// B-life: time by which fraction `percentile` of the population has failed
///
/// # Errors
///
/// [`Error::InvalidArgument`](reliability_core::Error::InvalidArgument)
/// unless `0 < percentile < 1`.
///
/// # Example
///
/// ```rust
/// use reliability_weibull::{b_life, FittedParameters};
///
/// let params = FittedParameters::new(2.0, 100.0).unwrap();
/// let b10 = b_life(&params, 0.10).unwrap();
/// let b50 = b_life(&params, 0.50).unwrap();
/// assert!(b10 < b50);
/// assert!(b_life(&params, 1.0).is_err());
/// ```
pub fn b_life(params: &FittedParameters, percentile: f64) -> Result<f64> {
    params.quantile(percentile)
}

/// Standard B-life percentiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BLifeValues {
    /// 1% of the population failed
    pub b1: f64,
    /// 5% failed
    pub b5: f64,
    /// 10% failed
    pub b10: f64,
    /// Median life
    pub b50: f64,
}

impl BLifeValues {
    pub fn from_params(params: &FittedParameters) -> Self {
        Self {
            b1: params.quantile_unchecked(0.01),
            b5: params.quantile_unchecked(0.05),
            b10: params.quantile_unchecked(0.10),
            b50: params.quantile_unchecked(0.50),
        }
    }
}

impl fmt::Display for BLifeValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B1: {:.2}, B5: {:.2}, B10: {:.2}, B50: {:.2}",
            self.b1, self.b5, self.b10, self.b50
        )
    }
}
