// SPDX-License-Identifier: AGPL-3.0-only

//! Check harness for the validation binaries.
//!
//! Every zsigma validation binary follows the same pattern: hardcoded
//! expected values with provenance, explicit pass/fail checks against
//! documented tolerances, exit code 0/1, machine-readable summary on
//! stdout. This module is the shared infrastructure.

use std::process;

/// One recorded check.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether the check passed
    pub passed: bool,
    /// What the check observed, formatted by the caller
    pub detail: String,
}

/// Accumulates checks and produces a summary with exit code.
#[derive(Debug, Default)]
#[must_use]
pub struct Checklist {
    /// Name of the validation binary
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl Checklist {
    /// Create a harness for a named validation binary.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Absolute tolerance check: `|observed − expected| < tolerance`.
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: (observed - expected).abs() < tolerance,
            detail: format!("observed={observed:.6e}, expected={expected:.6e}, tol={tolerance:.1e}"),
        });
    }

    /// Boolean check.
    pub fn check_flag(&mut self, label: &str, passed: bool) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            detail: format!("observed={passed}"),
        });
    }

    /// Exact count check.
    pub fn check_count(&mut self, label: &str, observed: usize, expected: usize) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: observed == expected,
            detail: format!("observed={observed}, expected={expected}"),
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Format the summary (separate from `finish` so tests can inspect it).
    #[must_use]
    pub fn format_summary(&self) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.checks.len()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(s, "  {icon} {}: {}", check.label, check.detail);
        }
        s
    }

    /// Print the summary and exit 0 (all passed) or 1 (any failed).
    pub fn finish(&self) -> ! {
        println!();
        print!("{}", self.format_summary());
        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        }
        let failed: Vec<&str> = self
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect();
        println!("FAILED CHECKS: {}", failed.join(", "));
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_pass_and_fail() {
        let mut cl = Checklist::new("test");
        cl.check_abs("exact", 1.0, 1.0, 1e-10);
        cl.check_abs("far", 2.0, 1.0, 1e-3);
        cl.check_flag("flag", true);
        cl.check_count("count", 3, 4);
        assert_eq!(cl.passed_count(), 2);
        assert!(!cl.all_passed());
    }

    #[test]
    fn empty_checklist_vacuously_passes() {
        let cl = Checklist::new("empty");
        assert!(cl.all_passed());
        assert_eq!(cl.passed_count(), 0);
    }

    #[test]
    fn summary_names_the_binary_and_counts() {
        let mut cl = Checklist::new("my_validation");
        cl.check_flag("a", true);
        cl.check_flag("b", false);
        let s = cl.format_summary();
        assert!(s.contains("my_validation"));
        assert!(s.contains("1/2"));
        assert!(s.contains('✓'));
        assert!(s.contains('✗'));
    }
}
