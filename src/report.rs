// SPDX-License-Identifier: AGPL-3.0-only

//! Aggregate diagnostic results returned to the caller.
//!
//! `DiagnosticReport` is the batch-mode output (proxy series, gate series,
//! Phase-0 flags); `ManualDiagnostic` is the scalar-mode output. Both are
//! read-only value objects and serialize for export; the core performs no
//! file or network output itself beyond the summary printers.

use crate::gate::GateSeries;
use crate::phase::PhaseLabel;
use crate::phase0::Phase0Report;
use crate::proxy::ProxySeries;
use serde::Serialize;

/// Full batch-mode diagnostic result.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    /// Normalized (Z, Σ) trajectory
    pub proxies: ProxySeries,
    /// Gate product and slope
    pub gate: GateSeries,
    /// Early-warning flags and summary
    pub phase0: Phase0Report,
}

impl DiagnosticReport {
    /// Number of samples covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Whether the report covers no samples (never true for a pipeline result).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Print the human-readable report block.
    pub fn print_summary(&self, label: &str) {
        println!();
        println!("  ── Z–Σ Diagnostic: {label} ──");
        println!("    Samples:          {}", self.len());
        if self.proxies.z_range_degenerate {
            println!("    WARNING: H98y2 range ~0 — Z values are near-arbitrary");
        }
        if self.proxies.sigma_range_degenerate {
            println!("    WARNING: exhaust-composite range ~0 — Σ values are near-arbitrary");
        }
        let bad = self.proxies.non_finite_count();
        if bad > 0 {
            println!("    WARNING: {bad} sample(s) with non-finite proxies (P_input = 0?)");
        }
        self.phase0.print_summary();
    }
}

/// Scalar-mode diagnostic for a single externally supplied (Z, Σ) point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ManualDiagnostic {
    /// Confinement proxy as supplied
    pub z: f64,
    /// Entropy-export proxy as supplied
    pub sigma: f64,
    /// Gate product `(1 − z)·σ`
    pub gate_product: f64,
    /// Zone classification
    pub label: PhaseLabel,
}

impl ManualDiagnostic {
    /// Print the scalar diagnostics panel.
    pub fn print_summary(&self) {
        println!("  Trap strength Z:      {:.2}", self.z);
        println!("  Entropy export Σ:     {:.2}", self.sigma);
        println!("  Gate product (1−Z)Σ:  {:.4}", self.gate_product);
        println!("  Phase:                {}", self.label);
        println!("  {}", self.label.description());
    }
}
