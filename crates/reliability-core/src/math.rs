//! Mathematical utilities for reliability analysis
//!
//! Special functions needed by lifetime distributions, most notably the gamma
//! function used for distribution means.

/// Special functions
pub mod special {
    use std::f64::consts::PI;

    /// Lanczos coefficients for g = 7, n = 9
    const LANCZOS_COEFFICIENTS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    /// Gamma function via the Lanczos approximation
    ///
    /// Arguments below 0.5 go through the reflection formula
    /// `Γ(x) = π / (sin(πx)·Γ(1 − x))`, which recurses exactly once since
    /// `1 − x ≥ 0.5`. Non-positive integers are poles and yield an infinite
    /// or NaN result.
    ///
    /// Relative error is below 1e-13 on [0.1, 10].
    ///
    /// # Example
    ///
    /// ```rust
    /// use reliability_core::math::special::gamma;
    ///
    /// assert!((gamma(5.0) - 24.0).abs() < 1e-9);
    /// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-8);
    /// ```
    pub fn gamma(x: f64) -> f64 {
        if x < 0.5 {
            return PI / ((PI * x).sin() * gamma(1.0 - x));
        }

        let x = x - 1.0;
        let series = LANCZOS_COEFFICIENTS
            .iter()
            .enumerate()
            .skip(1)
            .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, &c)| acc + c / (x + i as f64));

        let t = x + LANCZOS_COEFFICIENTS.len() as f64 - 1.5;
        (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * series
    }

}
