//! Building observations from maintenance history and manual entry
//!
//! Spreadsheet and CSV import belong to the caller; these helpers only cover
//! the normalised shapes: a maintenance log with numeric timestamps and a
//! free-text list of times.

use crate::observation::{Observation, ObservationKind};
use reliability_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of maintenance work recorded against an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    /// Repair after a failure
    Corrective,
    /// Planned work before failure
    Preventive,
}

impl MaintenanceKind {
    /// Observation kind for the interval that ends with this event
    pub fn observation_kind(&self) -> ObservationKind {
        match self {
            MaintenanceKind::Corrective => ObservationKind::Failure,
            MaintenanceKind::Preventive => ObservationKind::Suspension,
        }
    }
}

/// A maintenance event at a point on the asset's time axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    /// Event time (operating hours, days since commissioning, ...)
    pub at: f64,
    pub kind: MaintenanceKind,
}

impl MaintenanceEvent {
    pub fn corrective(at: f64) -> Self {
        Self {
            at,
            kind: MaintenanceKind::Corrective,
        }
    }

    pub fn preventive(at: f64) -> Self {
        Self {
            at,
            kind: MaintenanceKind::Preventive,
        }
    }
}

/// Turn a maintenance log into time-between-events observations
///
/// Events are ordered chronologically; each event after the first closes an
/// interval measured from the previous event. Corrective work ends the
/// interval in a failure, preventive work in a suspension. Events sharing a
/// timestamp produce no interval.
///
/// # Errors
///
/// [`Error::InvalidObservation`] if an event time is not finite; `index`
/// refers to the caller's slice.
pub fn observations_from_events(events: &[MaintenanceEvent]) -> Result<Vec<Observation>> {
    if let Some(index) = events.iter().position(|e| !e.at.is_finite()) {
        return Err(Error::InvalidObservation {
            index,
            time: events[index].at,
        });
    }

    let mut ordered = events.to_vec();
    ordered.sort_by(|a, b| a.at.total_cmp(&b.at));

    let observations: Vec<Observation> = ordered
        .windows(2)
        .filter_map(|pair| {
            let gap = pair[1].at - pair[0].at;
            (gap > 0.0).then(|| Observation::new(gap, pair[1].kind.observation_kind()))
        })
        .collect();

    debug!(
        events = events.len(),
        observations = observations.len(),
        "maintenance log converted"
    );
    Ok(observations)
}

/// Parse manually entered times into failure observations
///
/// Values may be separated by newlines, commas, semicolons or whitespace.
/// Empty fields are ignored. Values are not range-checked here; the
/// estimator rejects non-positive times with their position.
///
/// # Errors
///
/// [`Error::InvalidInput`] naming the first token that is not a number.
pub fn parse_time_entries(text: &str) -> Result<Vec<Observation>> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map(Observation::failure)
                .map_err(|_| Error::InvalidInput(format!("'{token}' is not a number")))
        })
        .collect()
}
