// SPDX-License-Identifier: AGPL-3.0-only

//! Diagnostic entry points.
//!
//! One shared pipeline with three doors in: a raw-observable batch, an
//! already-normalized (Z, Σ) trajectory, and a single scalar point. All
//! state is recreated per call (no caching, no shared mutable state), so
//! concurrent runs over different inputs need no coordination.

use crate::config::DiagConfig;
use crate::data::Batch;
use crate::error::ZsigmaError;
use crate::gate::{gate_product, GateSeries};
use crate::phase::classify;
use crate::phase0::detect_phase0;
use crate::proxy::{compute_proxies, ProxySeries};
use crate::report::{DiagnosticReport, ManualDiagnostic};

/// Run the full batch diagnostic: proxies → gate series → Phase-0 flags.
///
/// # Errors
///
/// `InsufficientData` for fewer than two rows, refused before any partial
/// result is computed. Numeric edge cases (non-finite proxies, degenerate
/// ranges) propagate into the report instead of failing; inspect
/// `report.proxies`.
pub fn run_diagnostic(batch: &Batch, config: &DiagConfig) -> Result<DiagnosticReport, ZsigmaError> {
    if batch.len() < 2 {
        return Err(ZsigmaError::InsufficientData { rows: batch.len() });
    }
    let proxies = compute_proxies(batch, config.epsilon);
    finish(proxies, config)
}

/// Diagnose a trajectory that already carries normalized proxies
/// (`Z_proxy`/`Sigma_proxy` columns), bypassing normalization.
///
/// # Errors
///
/// `ColumnLengthMismatch` when the slices disagree in length,
/// `InsufficientData` for fewer than two points.
pub fn run_trajectory(
    z: &[f64],
    sigma: &[f64],
    config: &DiagConfig,
) -> Result<DiagnosticReport, ZsigmaError> {
    let proxies = ProxySeries::from_trajectory(z, sigma)?;
    if proxies.len() < 2 {
        return Err(ZsigmaError::InsufficientData {
            rows: proxies.len(),
        });
    }
    finish(proxies, config)
}

/// Scalar mode: classify one externally supplied (Z, Σ) point and compute
/// its gate product. Total; no error paths.
#[must_use]
pub fn manual_diagnostic(z: f64, sigma: f64, config: &DiagConfig) -> ManualDiagnostic {
    ManualDiagnostic {
        z,
        sigma,
        gate_product: gate_product(z, sigma),
        label: classify(z, sigma, &config.zones),
    }
}

fn finish(proxies: ProxySeries, config: &DiagConfig) -> Result<DiagnosticReport, ZsigmaError> {
    let gate = GateSeries::from_proxies(&proxies)?;
    let phase0 = detect_phase0(
        &proxies,
        &gate,
        &config.square,
        config.d_crit,
        config.slope_percentile,
    );
    Ok(DiagnosticReport {
        proxies,
        gate,
        phase0,
    })
}
