// SPDX-License-Identifier: AGPL-3.0-only

//! Proxy normalization: raw observables → (Z, Σ) series.
//!
//! Z is a min–max normalization of the confinement quality factor; Σ is a
//! min–max normalization of a weighted exhaust composite
//! `0.5·f_rad + 0.4·f_ELM − 0.3·ΔW_ELM` with `f_rad = P_rad / P_input`.
//! Both normalizations carry an additive ε guard so a constant column
//! collapses to ≈ 0 instead of dividing by zero.
//!
//! Numeric edge cases are propagated, not trapped: `P_input = 0` puts
//! ±∞/NaN into the composite and onward into Σ, observable through
//! `non_finite_count`. A near-zero raw range sets the degenerate flag.

use crate::data::Batch;
use crate::tolerances::DEGENERATE_RANGE;
use serde::Serialize;

/// Normalized proxy trajectory, index-aligned with the input batch.
#[derive(Debug, Clone, Serialize)]
pub struct ProxySeries {
    /// Confinement proxy, nominally in [0, 1]
    pub z: Vec<f64>,
    /// Entropy-export proxy, nominally in [0, 1]
    pub sigma: Vec<f64>,
    /// Raw H98y2 range was ~0; Z values are near-arbitrary
    pub z_range_degenerate: bool,
    /// Raw exhaust-composite range was ~0; Σ values are near-arbitrary
    pub sigma_range_degenerate: bool,
}

/// NaN-discarding (min, max) over a slice. All-NaN input folds to
/// (+∞, −∞), which downstream arithmetic propagates as non-finite.
fn finite_extent(values: &[f64]) -> (f64, f64) {
    values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

/// Min–max normalize: `(v − min) / (max − min + ε)`. Returns the series
/// and whether the raw range was degenerate.
fn min_max_normalize(values: &[f64], epsilon: f64) -> (Vec<f64>, bool) {
    let (lo, hi) = finite_extent(values);
    let range = hi - lo;
    let normalized = values.iter().map(|&v| (v - lo) / (range + epsilon)).collect();
    (normalized, range.abs() <= DEGENERATE_RANGE)
}

/// Compute the (Z, Σ) proxy series for a batch.
///
/// Pure function: output length equals input length, index order preserved
/// (time order, never re-sorted).
#[must_use]
pub fn compute_proxies(batch: &Batch, epsilon: f64) -> ProxySeries {
    let h98: Vec<f64> = batch.samples.iter().map(|s| s.h98y2).collect();
    let (z, z_degenerate) = min_max_normalize(&h98, epsilon);

    let sigma_raw: Vec<f64> = batch
        .samples
        .iter()
        .map(|s| {
            let f_rad = s.p_rad / s.p_input; // P_input = 0 → ±∞/NaN, propagated
            0.5 * f_rad + 0.4 * s.f_elm - 0.3 * s.delta_w_elm
        })
        .collect();
    let (sigma, sigma_degenerate) = min_max_normalize(&sigma_raw, epsilon);

    ProxySeries {
        z,
        sigma,
        z_range_degenerate: z_degenerate,
        sigma_range_degenerate: sigma_degenerate,
    }
}

impl ProxySeries {
    /// Wrap an already-normalized (Z, Σ) trajectory, e.g. a dataset that
    /// ships `Z_proxy`/`Sigma_proxy` columns directly.
    ///
    /// # Errors
    ///
    /// `ColumnLengthMismatch` when the two slices disagree in length.
    pub fn from_trajectory(z: &[f64], sigma: &[f64]) -> Result<Self, crate::error::ZsigmaError> {
        if z.len() != sigma.len() {
            return Err(crate::error::ZsigmaError::ColumnLengthMismatch {
                column: "Sigma_proxy".to_string(),
                expected: z.len(),
                got: sigma.len(),
            });
        }
        Ok(Self {
            z: z.to_vec(),
            sigma: sigma.to_vec(),
            z_range_degenerate: false,
            sigma_range_degenerate: false,
        })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Count of sample indices where Z or Σ is non-finite (NaN or ±∞).
    /// Nonzero typically means `P_input = 0` somewhere in the batch.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.z
            .iter()
            .zip(&self.sigma)
            .filter(|(z, s)| !z.is_finite() || !s.is_finite())
            .count()
    }
}
