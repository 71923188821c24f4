// SPDX-License-Identifier: AGPL-3.0-only

//! Phase-0 early-warning detection over a proxy trajectory.
//!
//! Two independent channels, OR-combined per sample:
//! - **proximity** — the signed distance to the nearest Sandy Square wall
//!   drops below `d_crit` (a point outside the rectangle has negative
//!   distance and always trips this channel);
//! - **pressure** — dG/dt exceeds `dG_crit`, the configured percentile of
//!   the batch's own slope distribution. The threshold is relative to the
//!   batch by design: it flags slopes abnormal *for this dataset*, a
//!   leading indicator that fires even while the point is still well
//!   inside the rectangle.

use crate::bounds::SandySquare;
use crate::gate::GateSeries;
use crate::proxy::ProxySeries;
use crate::stats::percentile;
use serde::Serialize;

/// Per-sample flags and summary statistics from Phase-0 detection.
#[derive(Debug, Clone, Serialize)]
pub struct Phase0Report {
    /// Signed distance to the nearest wall (negative outside the rectangle)
    pub distance_to_wall: Vec<f64>,
    /// `distance_to_wall[i] < d_crit`
    pub proximity_flag: Vec<bool>,
    /// `dgdt[i] > dg_crit`
    pub pressure_flag: Vec<bool>,
    /// `proximity_flag[i] || pressure_flag[i]`
    pub phase0_flag: Vec<bool>,
    /// Slope threshold actually applied: this batch's percentile, not a constant
    pub dg_crit: f64,
    /// Smallest wall distance over the batch
    pub min_distance: f64,
    /// Largest dG/dt over the batch
    pub max_slope: f64,
    /// Number of samples with the combined flag raised
    pub flagged_count: usize,
}

/// Evaluate Phase-0 flags for an aligned (proxy, gate) series pair.
///
/// `dg_crit` is recomputed from `gate.dgdt` on every call; nothing is cached
/// across batches. Wall distances are never clamped; negative values mark
/// samples already outside the rectangle.
#[must_use]
pub fn detect_phase0(
    proxies: &ProxySeries,
    gate: &GateSeries,
    square: &SandySquare,
    d_crit: f64,
    slope_percentile: f64,
) -> Phase0Report {
    let distance_to_wall: Vec<f64> = proxies
        .z
        .iter()
        .zip(&proxies.sigma)
        .map(|(&z, &s)| square.wall_distance(z, s))
        .collect();

    let dg_crit = percentile(&gate.dgdt, slope_percentile);

    let proximity_flag: Vec<bool> = distance_to_wall.iter().map(|&d| d < d_crit).collect();
    let pressure_flag: Vec<bool> = gate.dgdt.iter().map(|&d| d > dg_crit).collect();
    let phase0_flag: Vec<bool> = proximity_flag
        .iter()
        .zip(&pressure_flag)
        .map(|(&p, &q)| p || q)
        .collect();

    // NaN-discarding folds, same as the proxy extent computation
    let min_distance = distance_to_wall
        .iter()
        .fold(f64::INFINITY, |lo, &d| lo.min(d));
    let max_slope = gate.dgdt.iter().fold(f64::NEG_INFINITY, |hi, &d| hi.max(d));
    let flagged_count = phase0_flag.iter().filter(|&&f| f).count();

    Phase0Report {
        distance_to_wall,
        proximity_flag,
        pressure_flag,
        phase0_flag,
        dg_crit,
        min_distance,
        max_slope,
        flagged_count,
    }
}

impl Phase0Report {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phase0_flag.len()
    }

    /// Whether the report covers no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phase0_flag.is_empty()
    }

    /// Whether any sample raised the combined flag.
    #[must_use]
    pub fn any_flagged(&self) -> bool {
        self.flagged_count > 0
    }

    /// Print the early-warning summary block.
    pub fn print_summary(&self) {
        let n = self.len().max(1);
        println!("  Phase-0 early warning:");
        println!("    Samples:          {}", self.len());
        println!(
            "    Flagged:          {} ({:.1}%)",
            self.flagged_count,
            100.0 * self.flagged_count as f64 / n as f64
        );
        println!(
            "    Proximity trips:  {}",
            self.proximity_flag.iter().filter(|&&f| f).count()
        );
        println!(
            "    Pressure trips:   {}",
            self.pressure_flag.iter().filter(|&&f| f).count()
        );
        println!("    Min wall dist:    {:.4}", self.min_distance);
        println!("    Max dG/dt:        {:.4e}", self.max_slope);
        println!("    dG_crit (batch):  {:.4e}", self.dg_crit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerances::{D_CRIT, SLOPE_PERCENTILE};

    fn detect(z: &[f64], sigma: &[f64]) -> Phase0Report {
        let proxies = ProxySeries::from_trajectory(z, sigma).unwrap();
        let gate = GateSeries::from_proxies(&proxies).unwrap();
        detect_phase0(
            &proxies,
            &gate,
            &SandySquare::default(),
            D_CRIT,
            SLOPE_PERCENTILE,
        )
    }

    #[test]
    fn interior_trajectory_keeps_proximity_quiet() {
        // All points at least 0.1 from every wall
        let report = detect(&[0.5, 0.55, 0.6, 0.55], &[0.45, 0.5, 0.55, 0.5]);
        assert!(report.proximity_flag.iter().all(|&f| !f));
        assert!(report.min_distance > D_CRIT);
    }

    #[test]
    fn outside_rectangle_distance_negative_and_flagged() {
        let report = detect(&[0.5, 0.2, 0.95, 0.5], &[0.5, 0.5, 0.5, 0.95]);
        assert!(report.distance_to_wall[1] < 0.0);
        assert!(report.distance_to_wall[2] < 0.0);
        assert!(report.distance_to_wall[3] < 0.0);
        // outside ⇒ inside the critical band ⇒ combined flag must be up
        for i in [1, 2, 3] {
            assert!(report.proximity_flag[i], "sample {i}");
            assert!(report.phase0_flag[i], "sample {i}");
        }
        assert!(report.min_distance < 0.0);
        assert!(report.any_flagged());
    }

    #[test]
    fn near_wall_inside_band_trips_proximity() {
        // z = 0.31 is 0.01 from z_min: inside the rectangle, inside the band
        let report = detect(&[0.31, 0.32, 0.33], &[0.5, 0.5, 0.5]);
        assert!(report.distance_to_wall[0] > 0.0);
        assert!(report.proximity_flag[0]);
    }

    #[test]
    fn pressure_flags_top_slopes_only() {
        // G rises slowly then jumps: the jump's slope sits above the
        // 90th percentile of the batch's own distribution.
        let n = 30;
        let z: Vec<f64> = (0..n)
            .map(|i| if i < n - 3 { 0.5 } else { 0.45 - 0.1 * (i - (n - 3)) as f64 })
            .collect();
        let sigma = vec![0.5; n];
        let report = detect(&z, &sigma);
        assert!(report.pressure_flag.iter().any(|&f| f));
        // quiet early stretch stays below the batch threshold
        assert!(!report.pressure_flag[5]);
        assert!(report.max_slope > report.dg_crit);
    }

    #[test]
    fn summary_counts_are_consistent() {
        let report = detect(&[0.5, 0.2, 0.6, 0.65], &[0.5, 0.5, 0.5, 0.5]);
        let combined = report
            .proximity_flag
            .iter()
            .zip(&report.pressure_flag)
            .filter(|(&p, &q)| p || q)
            .count();
        assert_eq!(report.flagged_count, combined);
        assert_eq!(report.len(), 4);
        assert!(!report.is_empty());
    }

    #[test]
    fn dg_crit_is_the_batch_percentile() {
        let report = detect(&[0.5, 0.55, 0.6, 0.65, 0.7], &[0.5, 0.5, 0.5, 0.5, 0.5]);
        let expected = percentile(
            &[
                report.max_slope, // slopes are all equal here: constant decline of G
            ],
            SLOPE_PERCENTILE,
        );
        // G declines linearly, so every dgdt equals max_slope and the
        // percentile of the distribution equals that same value.
        assert!((report.dg_crit - expected).abs() < 1e-12);
    }

    #[test]
    fn non_finite_coordinates_keep_summary_finite() {
        // A NaN Z contributes NaN per-axis distances, which the min fold
        // discards in favor of the finite Σ-axis distances; the slope
        // percentile likewise drops the NaN slopes around the bad sample.
        let report = detect(&[0.5, f64::NAN, 0.6, 0.62], &[0.5, 0.5, 0.5, 0.5]);
        assert!(report.min_distance.is_finite());
        assert!(report.dg_crit.is_finite());
    }
}
