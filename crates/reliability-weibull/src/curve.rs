//! Sampled reliability, cumulative failure and failure-rate curves

use crate::config::CurveConfig;
use crate::params::FittedParameters;
use crate::reliability::{cumulative_failure_probability, failure_rate, reliability};
use reliability_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which function a curve samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// R(t)
    Reliability,
    /// F(t) = 1 - R(t)
    CumulativeFailure,
    /// h(t)
    FailureRate,
}

impl CurveKind {
    /// Evaluate this curve's function at `t`
    pub fn evaluate(&self, params: &FittedParameters, t: f64) -> f64 {
        match self {
            CurveKind::Reliability => reliability(params, t),
            CurveKind::CumulativeFailure => cumulative_failure_probability(params, t),
            CurveKind::FailureRate => failure_rate(params, t),
        }
    }

    /// Index of the first sampled step
    ///
    /// The hazard can be infinite at zero, so its curve starts one step in.
    fn first_step(&self) -> usize {
        match self {
            CurveKind::FailureRate => 1,
            CurveKind::Reliability | CurveKind::CumulativeFailure => 0,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Reliability => write!(f, "Reliability"),
            CurveKind::CumulativeFailure => write!(f, "Cumulative Failure Probability"),
            CurveKind::FailureRate => write!(f, "Failure Rate"),
        }
    }
}

/// A single `(time, value)` sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    pub value: f64,
}

/// An eagerly sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    kind: CurveKind,
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lazy iterator over evenly spaced curve samples
#[derive(Debug, Clone)]
pub struct CurvePoints<'a> {
    params: &'a FittedParameters,
    kind: CurveKind,
    step: f64,
    next: usize,
    last: usize,
}

impl Iterator for CurvePoints<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.next > self.last {
            return None;
        }
        let time = self.step * self.next as f64;
        self.next += 1;
        Some(CurvePoint {
            time,
            value: self.kind.evaluate(self.params, time),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            (self.last - self.next).saturating_add(1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurvePoints<'_> {}

/// Lazily sample `kind` at `steps + 1` evenly spaced times over `[0, horizon]`
///
/// The failure-rate curve skips `t = 0` and yields `steps` points.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `horizon` is not finite and positive, or
/// `steps` is zero or `usize::MAX`.
pub fn curve_points(
    params: &FittedParameters,
    kind: CurveKind,
    horizon: f64,
    steps: usize,
) -> Result<CurvePoints<'_>> {
    if !(horizon.is_finite() && horizon > 0.0) {
        return Err(Error::InvalidArgument(format!(
            "curve horizon must be finite and positive, got {horizon}"
        )));
    }
    if steps == 0 {
        return Err(Error::InvalidArgument(
            "curve steps must be at least 1".to_string(),
        ));
    }
    // The step index must stay incrementable past the last point
    if steps == usize::MAX {
        return Err(Error::InvalidArgument(format!(
            "curve steps must be below {}, got {steps}",
            usize::MAX
        )));
    }
    Ok(CurvePoints {
        params,
        kind,
        step: horizon / steps as f64,
        next: kind.first_step(),
        last: steps,
    })
}

/// Eagerly sample a curve; see [`curve_points`]
pub fn curve(params: &FittedParameters, kind: CurveKind, horizon: f64, steps: usize) -> Result<Curve> {
    let points = curve_points(params, kind, horizon, steps)?.collect();
    Ok(Curve { kind, points })
}

/// Horizon covering the bulk of the distribution, `horizon_factor · eta`
pub fn default_horizon(params: &FittedParameters, config: &CurveConfig) -> f64 {
    config.horizon_factor * params.eta()
}

/// Sample all three curves with the configured horizon and resolution
pub fn standard_curves(params: &FittedParameters, config: &CurveConfig) -> Result<Vec<Curve>> {
    config.validate()?;
    let horizon = default_horizon(params, config);
    [
        CurveKind::Reliability,
        CurveKind::CumulativeFailure,
        CurveKind::FailureRate,
    ]
    .into_iter()
    .map(|kind| curve(params, kind, horizon, config.steps))
    .collect()
}
