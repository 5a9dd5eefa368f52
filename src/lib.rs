//! Weibull reliability analysis toolkit
//!
//! Re-exports the workspace crates behind a single dependency:
//!
//! - [`reliability_core`]: error type, Lanczos gamma, least-squares line fit, traits
//! - [`reliability_weibull`]: median rank regression, B-life, curves, maintenance advice
//!
//! # Example
//!
//! ```rust
//! use reliability_stats::prelude::*;
//!
//! let observations = parse_time_entries("100, 200, 300, 400, 500").unwrap();
//! let report = analyze(&observations).unwrap();
//! assert_eq!(report.pattern, FailurePattern::WearOut);
//! ```

pub use reliability_core;
pub use reliability_weibull;

pub use reliability_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use reliability_core::prelude::*;
    pub use reliability_weibull::{
        analyze, b_life, cumulative_failure_probability, curve, failure_rate, fit, fit_times,
        observations_from_events, parse_time_entries, recommended_interval, reliability,
        BLifeValues, Curve, CurveConfig, CurveKind, EstimatorConfig, FailurePattern,
        FittedParameters, MaintenanceEvent, MaintenanceRecommendation, Observation,
        ObservationKind, WeibullEstimator, WeibullReport,
    };
}
