// SPDX-License-Identifier: AGPL-3.0-only

//! Small statistical helpers: order-statistic percentile and the
//! sample-index gradient used for the gate-product slope.

/// Percentile of a sample by linear interpolation between order statistics.
///
/// `p` is in percent (0–100, clamped). Non-finite values are dropped before
/// ranking; an input with no finite values yields NaN. For `p = 90` on n
/// values the rank is `0.9·(n−1)`, interpolated between the two neighboring
/// order statistics (the standard "linear" quantile convention).
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);

    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

/// First derivative with respect to sample index: first-order central
/// differences in the interior, one-sided at both endpoints. Output length
/// equals input length.
///
/// Callers validate batch size before reaching this point; fewer than two
/// samples is a programming error here, not an input error.
#[must_use]
pub fn index_gradient(values: &[f64]) -> Vec<f64> {
    assert!(
        values.len() >= 2,
        "index_gradient requires at least 2 samples"
    );
    let n = values.len();
    let mut grad = Vec::with_capacity(n);
    grad.push(values[1] - values[0]);
    for i in 1..n - 1 {
        grad.push((values[i + 1] - values[i - 1]) / 2.0);
    }
    grad.push(values[n - 1] - values[n - 2]);
    grad
}
