//! Ordinary least-squares line fitting
//!
//! Probability-plot estimators linearise a distribution and fit a straight
//! line through the transformed points. This module provides that line fit
//! together with its coefficient of determination.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fitted line `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Coefficient of determination `1 − SS_res / SS_tot`
    pub r_squared: f64,
}

impl LineFit {
    /// Evaluate the fitted line at `x`
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y` on `x` by ordinary least squares
///
/// The slope and intercept equal the textbook closed form
/// `slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`,
/// `intercept = (Σy − slope·Σx) / n`; the sums are taken about the means so
/// that nearly-equal predictors do not cancel catastrophically.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if the slices differ in length
/// - [`Error::InsufficientData`] for fewer than two points
/// - [`Error::DegenerateData`] if every `x` is identical, or if `y` has no
///   spread while the line still leaves residuals
pub fn least_squares(x: &[f64], y: &[f64]) -> Result<LineFit> {
    if x.len() != y.len() {
        return Err(Error::InvalidInput(format!(
            "Size mismatch in least squares: {} predictors, {} responses",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(Error::insufficient_failures(2, n));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(Error::constant_predictor("least squares"));
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let (sxx, sxy) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - mean_x;
            (sxx + dx * dx, sxy + dx * (yi - mean_y))
        });

    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(Error::constant_predictor("least squares"));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_total: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
    let ss_residual: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();

    debug!(n, slope, intercept, ss_total, ss_residual, "least squares line fitted");

    let r_squared = if ss_total == 0.0 {
        if ss_residual == 0.0 {
            1.0
        } else {
            return Err(Error::DegenerateData(
                "responses have no spread but the fitted line leaves residuals".to_string(),
            ));
        }
    } else {
        1.0 - ss_residual / ss_total
    };

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
    })
}
