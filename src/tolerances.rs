// SPDX-License-Identifier: AGPL-3.0-only

//! Named numeric constants for the Z–Σ diagnostic: normalization guards,
//! proximity and slope thresholds, and test tolerances.
//!
//! Every tunable the pipeline consumes is defined here once, with its
//! provenance, and wired into `DiagConfig::default()`. Nothing in this module
//! is mutated at runtime.

// ═══════════════════════════════════════════════════════════════════
// Normalization guards
// ═══════════════════════════════════════════════════════════════════

/// Additive guard on min–max normalization denominators.
///
/// A constant observable column has `max − min = 0`; the guard keeps the
/// division finite (the whole series collapses to ≈ 0 instead of NaN).
/// On well-ranged data the bias it introduces is O(ε / range).
pub const NORM_EPSILON: f64 = 1e-6;

/// Raw range at or below which a column is reported as degenerate.
///
/// With `max − min` this small the epsilon guard dominates the denominator
/// and the normalized values are near-arbitrary. The condition is surfaced
/// as a soft flag on the proxy series, never as a hard failure.
pub const DEGENERATE_RANGE: f64 = 1e-12;

// ═══════════════════════════════════════════════════════════════════
// Phase-0 early-warning thresholds
// ═══════════════════════════════════════════════════════════════════

/// Critical distance to the nearest Sandy Square wall.
///
/// Samples closer than this (or outside the rectangle, where the distance
/// goes negative) raise the proximity flag. Expressed in normalized (Z, Σ)
/// units, so 0.05 is 5% of the unit square per axis.
pub const D_CRIT: f64 = 0.05;

/// Percentile of the batch's own dG/dt distribution used as the slope
/// threshold `dG_crit`.
///
/// The threshold is relative to the batch by construction: detection
/// sensitivity adapts to the scale of each dataset instead of applying an
/// absolute slope cutoff. Recomputed on every batch.
pub const SLOPE_PERCENTILE: f64 = 90.0;

// ═══════════════════════════════════════════════════════════════════
// Test tolerances
// ═══════════════════════════════════════════════════════════════════

/// Tolerance for operations that should be exact in f64 arithmetic
/// (a handful of multiplications and subtractions, no iteration).
pub const EXACT_F64: f64 = 1e-10;

/// Tolerance for comparisons against the ε-biased normalization output.
///
/// Min–max normalization with the `NORM_EPSILON` guard lands within
/// O(ε / range) of the exact value; 1e-4 covers ranges down to ~1e-2.
pub const NORMALIZED_F64: f64 = 1e-4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_are_ordered() {
        assert!(DEGENERATE_RANGE < NORM_EPSILON);
        assert!(NORM_EPSILON < D_CRIT);
    }

    #[test]
    fn slope_percentile_is_a_percentage() {
        assert!(SLOPE_PERCENTILE > 0.0 && SLOPE_PERCENTILE < 100.0);
    }

    #[test]
    fn d_crit_inside_unit_square() {
        assert!(D_CRIT > 0.0 && D_CRIT < 0.5);
    }
}
