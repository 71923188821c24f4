// SPDX-License-Identifier: AGPL-3.0-only

//! Scalar-mode phase classification of a single (Z, Σ) operating point.
//!
//! Total over [0, 1]²: every point maps to exactly one label, evaluated in
//! fixed precedence order: the dead-zone check runs first, so a starved
//! exhaust at low confinement is still the dead zone, not the danger zone.

use crate::bounds::ZoneThresholds;
use serde::Serialize;
use std::fmt;

/// Operating-phase label for a single (Z, Σ) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseLabel {
    /// Low confinement; energy escapes freely
    DeadZone,
    /// Strong confinement with starved exhaust; stress accumulates
    DangerZone,
    /// Strong confinement with controlled export
    SafeZone,
}

impl PhaseLabel {
    /// Operator-facing interpretation of the phase.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::DeadZone => {
                "Low confinement. Energy escapes freely. \
                 No sustained structure or gain is possible."
            }
            Self::DangerZone => {
                "High confinement with insufficient entropy export. \
                 Stress accumulation likely. Breakout or disruption imminent."
            }
            Self::SafeZone => {
                "High confinement with controlled entropy flow. \
                 System remains stable without stress accumulation."
            }
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadZone => write!(f, "Dead Zone"),
            Self::DangerZone => write!(f, "Danger Zone (Phase III risk)"),
            Self::SafeZone => write!(f, "Safe Zone (Phase II)"),
        }
    }
}

/// Classify a single (Z, Σ) point. Precedence is fixed:
/// dead zone, then danger zone, then safe zone.
#[must_use]
pub fn classify(z: f64, sigma: f64, zones: &ZoneThresholds) -> PhaseLabel {
    if z < zones.z_dead {
        PhaseLabel::DeadZone
    } else if z > zones.z_high && sigma < zones.sigma_starved {
        PhaseLabel::DangerZone
    } else {
        PhaseLabel::SafeZone
    }
}
