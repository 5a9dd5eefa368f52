//! Time observations fed to lifetime estimators

use reliability_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an observation ended in failure or was censored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    /// The item failed at the recorded time
    Failure,
    /// The item was removed from service (e.g. preventive maintenance) before
    /// failing; the time is only a lower bound on its life
    Suspension,
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationKind::Failure => write!(f, "failure"),
            ObservationKind::Suspension => write!(f, "suspension"),
        }
    }
}

/// A time-to-failure or time-between-failures record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Elapsed time, in whatever unit the caller works in
    pub time: f64,
    /// Failure or suspension
    pub kind: ObservationKind,
}

impl Observation {
    /// Create an observation
    pub fn new(time: f64, kind: ObservationKind) -> Self {
        Self { time, kind }
    }

    /// Create a failure observation
    pub fn failure(time: f64) -> Self {
        Self::new(time, ObservationKind::Failure)
    }

    /// Create a suspension (censored) observation
    pub fn suspension(time: f64) -> Self {
        Self::new(time, ObservationKind::Suspension)
    }

    pub fn is_failure(&self) -> bool {
        self.kind == ObservationKind::Failure
    }

    /// Whether the time is usable by an estimator
    pub fn is_valid(&self) -> bool {
        self.time.is_finite() && self.time > 0.0
    }
}

/// Wrap raw failure times as failure observations
pub fn failures_from_times(times: &[f64]) -> Vec<Observation> {
    times.iter().map(|&t| Observation::failure(t)).collect()
}

/// Reject the first observation whose time is non-positive or non-finite
///
/// Suspensions are checked too: a record the caller could not time correctly
/// is a data-entry problem whichever kind it carries.
pub fn validate(observations: &[Observation]) -> Result<()> {
    match observations.iter().position(|o| !o.is_valid()) {
        Some(index) => Err(Error::InvalidObservation {
            index,
            time: observations[index].time,
        }),
        None => Ok(()),
    }
}

/// Failure times only, in recorded order
pub fn failure_times(observations: &[Observation]) -> Vec<f64> {
    observations
        .iter()
        .filter(|o| o.is_failure())
        .map(|o| o.time)
        .collect()
}
