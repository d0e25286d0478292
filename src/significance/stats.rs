// ── Normal CDF (Zelen & Severo, A&S 26.2.17 with Horner's method) ───

/// Standard normal CDF, P(Z <= z).
///
/// Rational polynomial approximation with absolute error below ~1e-7.
/// The coefficients are the five-to-seven digit ones from the published
/// table, and reported confidence values depend on them exactly.
/// Callers in this crate always pass `z.abs()`.
pub fn normal_cdf(z: f64) -> f64 {
    let upper_tail = normal_sf(z.abs());
    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Upper tail P(Z > z) for z >= 0.
pub fn normal_sf(z: f64) -> f64 {
    debug_assert!(z >= 0.0 || z.is_nan(), "normal_sf requires z >= 0, got {}", z);

    let t = 1.0 / (1.0 + 0.2316419 * z);
    let d = 0.3989423 * (-z * z / 2.0).exp();

    let poly = 0.3193815 + t * (-0.3565638 + t * (1.781478 + t * (-1.821256 + t * 1.330274)));

    d * t * poly
}

// ── Two-Proportion Z-Test ───────────────────────────────────────────

/// Observed proportion `successes / trials`.
pub fn proportion(successes: u64, trials: u64) -> f64 {
    successes as f64 / trials as f64
}

/// Standard error of a sample proportion, sqrt(p(1-p)/n).
pub fn standard_error(rate: f64, trials: u64) -> f64 {
    (rate * (1.0 - rate) / trials as f64).sqrt()
}

/// Unpooled z-score for the difference of two proportions.
///
/// NaN when both standard errors are zero and the rates are equal.
pub fn z_score(control_rate: f64, control_se: f64, variant_rate: f64, variant_se: f64) -> f64 {
    (variant_rate - control_rate) / (control_se.powi(2) + variant_se.powi(2)).sqrt()
}

/// Two-tailed confidence, in percent, implied by a z-score.
pub fn two_tailed_confidence_pct(z: f64) -> f64 {
    let p = normal_cdf(z.abs());
    (1.0 - (1.0 - p) * 2.0) * 100.0
}
