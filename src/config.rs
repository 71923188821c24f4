// SPDX-License-Identifier: AGPL-3.0-only

//! Diagnostic configuration.
//!
//! One struct carrying every overridable knob; `Default` wires in the named
//! constants from `tolerances`. The pipeline takes the config by reference
//! and never mutates it.

use crate::bounds::{SandySquare, ZoneThresholds};
use crate::tolerances::{D_CRIT, NORM_EPSILON, SLOPE_PERCENTILE};
use serde::{Deserialize, Serialize};

/// Configuration for one diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DiagConfig {
    /// Safe operating rectangle
    pub square: SandySquare,
    /// Scalar-mode zone boundaries
    pub zones: ZoneThresholds,
    /// Proximity threshold for the Phase-0 wall-distance flag
    pub d_crit: f64,
    /// Percentile of the batch's dG/dt used as the slope threshold
    pub slope_percentile: f64,
    /// Min–max normalization guard
    pub epsilon: f64,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            square: SandySquare::default(),
            zones: ZoneThresholds::default(),
            d_crit: D_CRIT,
            slope_percentile: SLOPE_PERCENTILE,
            epsilon: NORM_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wires_tolerance_constants() {
        let cfg = DiagConfig::default();
        assert!((cfg.d_crit - D_CRIT).abs() < 1e-15);
        assert!((cfg.slope_percentile - SLOPE_PERCENTILE).abs() < 1e-15);
        assert!((cfg.epsilon - NORM_EPSILON).abs() < 1e-15);
        assert_eq!(cfg.square, SandySquare::default());
        assert_eq!(cfg.zones, ZoneThresholds::default());
    }

    #[test]
    fn overrides_stick() {
        let cfg = DiagConfig {
            d_crit: 0.1,
            ..DiagConfig::default()
        };
        assert!((cfg.d_crit - 0.1).abs() < 1e-15);
        assert!((cfg.epsilon - NORM_EPSILON).abs() < 1e-15);
    }
}
