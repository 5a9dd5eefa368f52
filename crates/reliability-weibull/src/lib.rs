//! Weibull reliability analysis
//!
//! Fits a two-parameter Weibull distribution to failure times by median rank
//! regression and derives the metrics reliability engineers work with:
//!
//! - **Fit**: shape β, scale η, goodness of fit R², MTBF = η·Γ(1 + 1/β)
//! - **B-life**: time by which a given fraction of the population has failed
//! - **Functions**: reliability R(t), cumulative failure F(t), failure rate h(t)
//! - **Curves**: evenly sampled R, F and h over a time horizon
//! - **Maintenance**: failure pattern (early-life / random / wear-out) and a
//!   preventive replacement interval for wear-out items
//!
//! # Shape Parameter
//!
//! | β | Failure rate | Pattern | Preventive maintenance |
//! |---|--------------|---------|------------------------|
//! | < 1 | Decreasing | Early-life | Not effective |
//! | ≈ 1 | Constant | Random | Not effective |
//! | > 1 | Increasing | Wear-out | Age-based interval |
//!
//! # Example
//!
//! ```rust
//! use reliability_weibull::{b_life, fit, recommended_interval, reliability, Observation};
//!
//! let observations = vec![
//!     Observation::failure(100.0),
//!     Observation::failure(200.0),
//!     Observation::suspension(250.0),
//!     Observation::failure(300.0),
//!     Observation::failure(400.0),
//!     Observation::failure(500.0),
//! ];
//!
//! let params = fit(&observations).unwrap();
//! assert!((params.beta() - 1.6242).abs() < 1e-3);
//!
//! let b10 = b_life(&params, 0.10).unwrap();
//! assert!(reliability(&params, b10) > 0.89);
//!
//! let advice = recommended_interval(&params);
//! assert!(advice.interval.is_some());
//! ```
//!
//! Suspensions are accepted and counted but the regression uses failures only.

pub mod config;
pub mod curve;
pub mod estimator;
pub mod maintenance;
pub mod observation;
pub mod params;
pub mod reliability;
pub mod report;
pub mod sources;

pub use config::{CurveConfig, EstimatorConfig, DEFAULT_RANDOM_TOLERANCE, MIN_FAILURES};
pub use curve::{curve, curve_points, default_horizon, standard_curves, Curve, CurveKind, CurvePoint, CurvePoints};
pub use estimator::{bernard_rank, fit, fit_times, median_ranks, WeibullEstimator};
pub use maintenance::{
    recommended_interval, recommended_interval_with_tolerance, FailurePattern,
    MaintenanceRecommendation,
};
pub use observation::{Observation, ObservationKind};
pub use params::FittedParameters;
pub use reliability::{b_life, cumulative_failure_probability, failure_rate, reliability, BLifeValues};
pub use report::{analyze, WeibullReport};
pub use sources::{observations_from_events, parse_time_entries, MaintenanceEvent, MaintenanceKind};

pub use reliability_core::{gamma, Error, LifetimeDistribution, LifetimeEstimator, Result};
