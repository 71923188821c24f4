// SPDX-License-Identifier: AGPL-3.0-only

//! Gate Product G = (1 − Z)·Σ and its index derivative.
//!
//! G measures simultaneous strong confinement and controlled export: it
//! vanishes when the trap is total (Z = 1) or the exhaust is closed (Σ = 0),
//! and for Z, Σ ∈ [0, 1] it stays inside [0, 1]. The series form also carries
//! dG/dt, the finite-difference slope the Phase-0 detector thresholds.

use crate::error::ZsigmaError;
use crate::proxy::ProxySeries;
use crate::stats::index_gradient;
use serde::Serialize;

/// Scalar gate product `(1 − z)·σ`, used by the manual diagnostics panel.
#[must_use]
pub fn gate_product(z: f64, sigma: f64) -> f64 {
    (1.0 - z) * sigma
}

/// Gate product series with its sample-index derivative.
#[derive(Debug, Clone, Serialize)]
pub struct GateSeries {
    /// `g[i] = (1 − z[i])·sigma[i]`
    pub g: Vec<f64>,
    /// Centered finite-difference slope of `g` (one-sided at both endpoints)
    pub dgdt: Vec<f64>,
}

impl GateSeries {
    /// Derive G and dG/dt from a proxy series.
    ///
    /// # Errors
    ///
    /// `InsufficientData` for fewer than two samples; one row has no slope,
    /// and the detector downstream would silently lose its pressure channel
    /// if a sentinel were emitted instead.
    pub fn from_proxies(proxies: &ProxySeries) -> Result<Self, ZsigmaError> {
        if proxies.len() < 2 {
            return Err(ZsigmaError::InsufficientData {
                rows: proxies.len(),
            });
        }
        let g: Vec<f64> = proxies
            .z
            .iter()
            .zip(&proxies.sigma)
            .map(|(&z, &s)| gate_product(z, s))
            .collect();
        let dgdt = index_gradient(&g);
        Ok(Self { g, dgdt })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.g.len()
    }

    /// Whether the series is empty (never true for a constructed series).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.g.is_empty()
    }
}
