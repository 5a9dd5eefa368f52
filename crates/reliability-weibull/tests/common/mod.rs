//! Common test utilities for reliability-weibull integration tests
#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Weibull};
use reliability_weibull::{bernard_rank, Observation};

/// Failure times placed exactly on the Weibull quantiles at Bernard's ranks
pub fn quantile_times(beta: f64, eta: f64, n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| eta * (-(1.0 - bernard_rank(i, n)).ln()).powf(1.0 / beta))
        .collect()
}

/// Seeded Weibull sample wrapped as failure observations
pub fn sample_failures(beta: f64, eta: f64, n: usize, seed: u64) -> Vec<Observation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Weibull::new(eta, beta).unwrap();
    (0..n).map(|_| Observation::failure(dist.sample(&mut rng))).collect()
}
