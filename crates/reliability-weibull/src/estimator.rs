//! Median rank regression for the two-parameter Weibull distribution
//!
//! Linearising the Weibull CDF gives
//!
//! ```text
//! ln(-ln(1 - F(t))) = β·ln(t) - β·ln(η)
//! ```
//!
//! so plotting `y = ln(-ln(1 - F_i))` against `x = ln(t_i)` yields a line
//! with slope β and intercept `-β·ln(η)`. The empirical `F_i` are Bernard's
//! median ranks `(i - 0.3) / (n + 0.4)`.
//!
//! Suspensions are validated and counted but not regressed.

use crate::config::EstimatorConfig;
use crate::observation::{self, Observation};
use crate::params::FittedParameters;
use reliability_core::{least_squares, Error, LifetimeEstimator, Result};
use tracing::{debug, instrument};

/// Bernard's approximation of the median rank of order statistic `i` (1-based)
#[inline]
pub fn bernard_rank(i: usize, n: usize) -> f64 {
    (i as f64 - 0.3) / (n as f64 + 0.4)
}

/// Median ranks for a sample of size `n`
pub fn median_ranks(n: usize) -> Vec<f64> {
    (1..=n).map(|i| bernard_rank(i, n)).collect()
}

/// Weibull estimator using median rank regression of Y on X
#[derive(Debug, Clone, Default)]
pub struct WeibullEstimator {
    config: EstimatorConfig,
}

impl WeibullEstimator {
    /// Create an estimator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with a custom configuration
    ///
    /// # Errors
    ///
    /// Propagates [`EstimatorConfig::validate`] failures.
    pub fn with_config(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Fit Weibull parameters to the failure observations
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidObservation`] for any non-positive or non-finite time
    /// - [`Error::InsufficientData`] with fewer than `min_failures` failures
    /// - [`Error::DegenerateData`] when all failure times are equal or the
    ///   fitted shape is not positive
    ///
    /// # Example
    ///
    /// ```rust
    /// use reliability_weibull::{Observation, WeibullEstimator};
    ///
    /// let observations: Vec<_> = [100.0, 200.0, 300.0, 400.0, 500.0]
    ///     .into_iter()
    ///     .map(Observation::failure)
    ///     .collect();
    /// let params = WeibullEstimator::new().fit(&observations).unwrap();
    /// assert!(params.beta() > 1.0);
    /// assert!(params.r2().unwrap() > 0.98);
    /// ```
    #[instrument(skip(self, observations), fields(n_observations = observations.len()))]
    pub fn fit(&self, observations: &[Observation]) -> Result<FittedParameters> {
        observation::validate(observations)?;

        let mut times = observation::failure_times(observations);
        let suspensions = observations.len() - times.len();
        if suspensions > 0 {
            debug!(suspensions, "excluding suspensions from the regression");
        }
        if times.len() < self.config.min_failures {
            return Err(Error::insufficient_failures(
                self.config.min_failures,
                times.len(),
            ));
        }

        // Times are finite after validation, so the ordering is total.
        times.sort_by(f64::total_cmp);
        let n = times.len();
        if times[0] == times[n - 1] {
            return Err(Error::constant_predictor("median rank regression"));
        }

        let x: Vec<f64> = times.iter().map(|t| t.ln()).collect();
        let y: Vec<f64> = median_ranks(n)
            .into_iter()
            .map(|f| (-(1.0 - f).ln()).ln())
            .collect();

        let line = least_squares(&x, &y)?;

        let beta = line.slope;
        if !(beta.is_finite() && beta > 0.0) {
            return Err(Error::non_physical_shape(beta));
        }
        let eta = (-line.intercept / beta).exp();
        if !(eta.is_finite() && eta > 0.0) {
            return Err(Error::DegenerateData(format!(
                "fitted scale parameter {eta} is not finite and positive"
            )));
        }

        let params = FittedParameters::from_fit(beta, eta, line.r_squared, n, suspensions);
        debug!(
            beta,
            eta,
            r2 = line.r_squared,
            mtbf = params.mtbf(),
            "weibull fit complete"
        );
        Ok(params)
    }

    /// Fit raw failure times (every value treated as a failure)
    pub fn fit_times(&self, times: &[f64]) -> Result<FittedParameters> {
        self.fit(&observation::failures_from_times(times))
    }

    /// Fit many independent datasets, one result per dataset
    ///
    /// With the `parallel` feature the datasets are fitted on the rayon
    /// thread pool; results keep the input order either way.
    pub fn fit_batch<D>(&self, datasets: &[D]) -> Vec<Result<FittedParameters>>
    where
        D: AsRef<[Observation]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            datasets.par_iter().map(|d| self.fit(d.as_ref())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            datasets.iter().map(|d| self.fit(d.as_ref())).collect()
        }
    }
}

impl LifetimeEstimator<Observation> for WeibullEstimator {
    type Output = FittedParameters;

    fn fit(&self, observations: &[Observation]) -> Result<FittedParameters> {
        WeibullEstimator::fit(self, observations)
    }

    fn name(&self) -> &str {
        "Weibull median rank regression"
    }

    fn minimum_sample_size(&self) -> usize {
        self.config.min_failures
    }
}

/// Fit with the default configuration
pub fn fit(observations: &[Observation]) -> Result<FittedParameters> {
    WeibullEstimator::new().fit(observations)
}

/// Fit raw failure times with the default configuration
pub fn fit_times(times: &[f64]) -> Result<FittedParameters> {
    WeibullEstimator::new().fit_times(times)
}
