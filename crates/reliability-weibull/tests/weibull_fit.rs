//! End-to-end tests of the Weibull estimator and derived metrics

mod common;

use approx::assert_relative_eq;
use reliability_weibull::observation::failures_from_times;
use reliability_weibull::{
    analyze, b_life, curve, fit, fit_times, gamma, observations_from_events, parse_time_entries,
    reliability, CurveKind, Error, FailurePattern, FittedParameters, MaintenanceEvent, Observation,
};

#[test]
fn test_concrete_scenario() {
    let params = fit_times(&[100.0, 200.0, 300.0, 400.0, 500.0]).unwrap();
    assert_relative_eq!(params.beta(), 1.624157809794464, epsilon = 1e-6);
    assert_relative_eq!(params.eta(), 352.45024711536973, epsilon = 1e-6);
    assert_relative_eq!(params.r2().unwrap(), 0.9897778566353944, epsilon = 1e-6);
}

#[test]
fn test_known_distribution_recovery() {
    for &(beta, eta) in &[(0.7, 1500.0), (1.0, 200.0), (2.0, 100.0), (3.5, 8760.0)] {
        for n in [5, 12, 40] {
            let times = common::quantile_times(beta, eta, n);
            let params = fit_times(&times).unwrap();
            assert_relative_eq!(params.beta(), beta, max_relative = 0.01);
            assert_relative_eq!(params.eta(), eta, max_relative = 0.01);
            assert_relative_eq!(params.r2().unwrap(), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_seeded_sample_recovers_parameters() {
    let observations = common::sample_failures(2.0, 100.0, 2000, 42);
    let params = fit(&observations).unwrap();
    assert_relative_eq!(params.beta(), 2.0, max_relative = 0.1);
    assert_relative_eq!(params.eta(), 100.0, max_relative = 0.1);
    assert!(params.r2().unwrap() > 0.95);
}

#[test]
fn test_error_on_insufficient_data() {
    assert!(matches!(
        fit(&[]),
        Err(Error::InsufficientData { actual: 0, .. })
    ));
    assert!(matches!(
        fit(&[Observation::failure(42.0)]),
        Err(Error::InsufficientData { actual: 1, .. })
    ));
}

#[test]
fn test_errors_surface_to_caller() {
    let err = fit_times(&[10.0, 0.0, 20.0]).unwrap_err();
    assert!(err.is_data_problem());
    assert!(err.to_string().contains("index 1"));

    let err = fit_times(&[7.0, 7.0, 7.0]).unwrap_err();
    assert!(matches!(err, Error::DegenerateData(_)));

    let params = fit_times(&[10.0, 20.0, 30.0]).unwrap();
    assert!(matches!(b_life(&params, 1.5), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_gamma_accuracy() {
    assert_relative_eq!(gamma(1.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(gamma(2.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(gamma(5.0), 24.0, max_relative = 1e-12);
    assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-8);
}

#[test]
fn test_maintenance_log_pipeline() {
    // Pump run hours: corrective repairs interleaved with planned overhauls
    let events = [
        MaintenanceEvent::corrective(0.0),
        MaintenanceEvent::corrective(1150.0),
        MaintenanceEvent::preventive(1900.0),
        MaintenanceEvent::corrective(3350.0),
        MaintenanceEvent::corrective(4200.0),
        MaintenanceEvent::preventive(5000.0),
        MaintenanceEvent::corrective(6600.0),
    ];
    let observations = observations_from_events(&events).unwrap();
    assert_eq!(observations.len(), 6);

    let report = analyze(&observations).unwrap();
    assert_eq!(report.parameters.failures(), 4);
    assert_eq!(report.parameters.suspensions(), 2);
    assert!(report.parameters.beta() > 0.0);
}

#[test]
fn test_manual_entry_pipeline() {
    let observations = parse_time_entries("100\n200\n300\n400\n500").unwrap();
    assert_eq!(observations, failures_from_times(&[100.0, 200.0, 300.0, 400.0, 500.0]));
    let report = analyze(&observations).unwrap();
    assert_eq!(report.pattern, FailurePattern::WearOut);
    assert!(report.recommendation.interval.unwrap() < report.parameters.eta());
}

#[test]
fn test_curves_agree_with_point_functions() {
    let params = fit_times(&[100.0, 200.0, 300.0, 400.0, 500.0]).unwrap();
    let r = curve(&params, CurveKind::Reliability, 800.0, 16).unwrap();
    let f = curve(&params, CurveKind::CumulativeFailure, 800.0, 16).unwrap();
    for (rp, fp) in r.points().iter().zip(f.points()) {
        assert_eq!(rp.time, fp.time);
        assert_relative_eq!(rp.value, reliability(&params, rp.time), epsilon = 1e-15);
        assert_relative_eq!(rp.value + fp.value, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_restored_parameters_match_fit() {
    let fitted = fit_times(&[100.0, 200.0, 300.0, 400.0, 500.0]).unwrap();
    let json = serde_json::to_string(&fitted).unwrap();
    let restored: FittedParameters = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(restored.beta(), fitted.beta(), max_relative = 1e-15);
    assert_relative_eq!(restored.eta(), fitted.eta(), max_relative = 1e-15);
    assert_relative_eq!(restored.mtbf(), fitted.mtbf(), max_relative = 1e-15);
    assert_eq!(restored.failures(), fitted.failures());

    let rebuilt = FittedParameters::new(fitted.beta(), fitted.eta()).unwrap();
    assert_relative_eq!(rebuilt.mtbf(), fitted.mtbf(), max_relative = 1e-12);
}
