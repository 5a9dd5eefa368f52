//! Property-based tests for the Weibull estimator and reliability functions

mod common;

use proptest::prelude::*;
use reliability_weibull::{
    b_life, cumulative_failure_probability, fit, fit_times, recommended_interval, reliability,
    FittedParameters,
};
use reliability_weibull::observation::failures_from_times;

fn params_strategy() -> impl Strategy<Value = FittedParameters> {
    (0.2f64..5.0, 0.1f64..1e5).prop_map(|(beta, eta)| FittedParameters::new(beta, eta).unwrap())
}

proptest! {
    // Property: any non-constant positive sample fits to positive parameters
    #[test]
    fn prop_fit_yields_positive_parameters(
        raw in prop::collection::vec(1u32..100_000, 2..60)
    ) {
        prop_assume!(raw.iter().any(|&v| v != raw[0]));
        let times: Vec<f64> = raw.iter().map(|&v| v as f64).collect();

        let params = fit(&failures_from_times(&times)).unwrap();
        prop_assert!(params.beta() > 0.0);
        prop_assert!(params.eta() > 0.0);
        prop_assert!(params.mtbf() > 0.0);
        prop_assert!(params.r2().unwrap() <= 1.0 + 1e-12);
    }

    // Property: exact quantile data is recovered
    #[test]
    fn prop_quantile_data_recovered(
        beta in 0.3f64..5.0,
        eta in 1.0f64..1e4,
        n in 3usize..50
    ) {
        let params = fit_times(&common::quantile_times(beta, eta, n)).unwrap();
        prop_assert!((params.beta() - beta).abs() / beta < 0.01);
        prop_assert!((params.eta() - eta).abs() / eta < 0.01);
        prop_assert!((params.r2().unwrap() - 1.0).abs() < 1e-9);
    }

    // Property: reliability strictly decreases with time
    #[test]
    fn prop_reliability_decreasing(
        params in params_strategy(),
        u in 0.01f64..2.0,
        delta in 0.01f64..0.5
    ) {
        let t1 = params.eta() * u;
        let t2 = t1 * (1.0 + delta);
        prop_assert_eq!(reliability(&params, 0.0), 1.0);
        prop_assert!(reliability(&params, t1) < 1.0);
        prop_assert!(reliability(&params, t2) < reliability(&params, t1));
    }

    // Property: F(t) + R(t) = 1
    #[test]
    fn prop_complementarity(params in params_strategy(), u in 0.0f64..5.0) {
        let t = params.eta() * u;
        let total = reliability(&params, t) + cumulative_failure_probability(&params, t);
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    // Property: B10 precedes the median life
    #[test]
    fn prop_b_life_ordering(params in params_strategy()) {
        prop_assert!(b_life(&params, 0.10).unwrap() < b_life(&params, 0.50).unwrap());
    }

    // Property: interval only for increasing hazard
    #[test]
    fn prop_recommendation_boundary(beta in 0.1f64..10.0, eta in 1.0f64..1e5) {
        let params = FittedParameters::new(beta, eta).unwrap();
        let advice = recommended_interval(&params);
        if beta <= 1.0 {
            prop_assert!(advice.interval.is_none());
        } else {
            let interval = advice.interval.unwrap();
            prop_assert!(interval.is_finite() && interval > 0.0);
        }
    }
}

#[test]
fn test_recommendation_at_exactly_one() {
    let params = FittedParameters::new(1.0, 500.0).unwrap();
    assert!(recommended_interval(&params).interval.is_none());
}
