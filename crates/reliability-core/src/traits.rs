//! Core traits for lifetime analysis
//!
//! Distribution-specific types (Weibull and friends) live in their own crates
//! and implement these traits so that reporting and curve generation can be
//! written once.

use crate::{Error, Result};

/// A fitted or assumed lifetime distribution over non-negative time
///
/// Implementors provide the survival function, hazard and quantile; the
/// cumulative failure probability and B-life percentiles follow from those.
pub trait LifetimeDistribution {
    /// Probability of surviving past `t`
    fn reliability(&self, t: f64) -> f64;

    /// Instantaneous failure rate at `t`
    fn failure_rate(&self, t: f64) -> f64;

    /// Time by which fraction `p` of the population has failed
    ///
    /// Called only with `p` strictly inside (0, 1).
    fn quantile_unchecked(&self, p: f64) -> f64;

    /// Expected lifetime
    fn mean_life(&self) -> f64;

    /// Probability of failing by `t`
    fn cumulative_failure_probability(&self, t: f64) -> f64 {
        1.0 - self.reliability(t)
    }

    /// Time by which fraction `p` of the population has failed
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless `0 < p < 1`.
    fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability(p));
        }
        Ok(self.quantile_unchecked(p))
    }
}

/// Estimator producing a fitted model from a sample of observations
///
/// Mirrors the single-sample estimator shape used across the workspace: the
/// estimator owns its configuration and is a pure function of its input.
pub trait LifetimeEstimator<O> {
    /// Output of a successful fit
    type Output;

    /// Fit the model to the given observations
    ///
    /// Implementations outside this workspace can surface their own failures
    /// with `?` on an [`anyhow::Error`], which converts into [`Error::Other`].
    fn fit(&self, observations: &[O]) -> Result<Self::Output>;

    /// Human-readable name of the estimation method
    fn name(&self) -> &str;

    /// Minimum number of usable observations the method needs
    fn minimum_sample_size(&self) -> usize;
}
