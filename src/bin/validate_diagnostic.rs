// SPDX-License-Identifier: AGPL-3.0-only

//! Reference-scenario validation for the Z–Σ diagnostic.
//!
//! Expected values are pinned from the control implementation's published
//! operating points:
//!   - manual (0.85, 0.30) → G = 0.1050, Safe Zone
//!   - manual (0.20, 0.50) → Dead Zone (precedence over Σ)
//!   - manual (0.80, 0.10) → Danger Zone
//!   - constant H98y2 batch → Z ≈ 0, finite (ε guard)
//!   - excursion trajectory → negative wall distance always flags
//!
//! # Validation checks
//!
//! | Check | Description |
//! |-------|-------------|
//! | gate product | scalar G at the default operating point |
//! | zone labels | precedence-ordered classification |
//! | ε guard | constant column stays finite |
//! | excursion | outside-rectangle samples carry the combined flag |
//! | dG_crit | per-batch percentile, not a constant |

use zsigma::config::DiagConfig;
use zsigma::data::{Batch, Sample};
use zsigma::phase::PhaseLabel;
use zsigma::pipeline::{manual_diagnostic, run_diagnostic, run_trajectory};
use zsigma::validation::Checklist;

fn constant_h98_batch() -> Batch {
    Batch::from_samples(
        (0..3)
            .map(|i| Sample {
                time: f64::from(i),
                h98y2: 1.0,
                p_rad: 2.0 + f64::from(i),
                p_input: 10.0,
                f_elm: 0.4,
                delta_w_elm: 0.1,
                tau_e: None,
            })
            .collect(),
    )
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  Z–Σ Diagnostic Validation                               ║");
    println!("║  Pinned reference scenarios, manual + batch modes        ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let cfg = DiagConfig::default();
    let mut checklist = Checklist::new("zsigma_diagnostic");

    // ═══ Scalar mode ═══
    let m = manual_diagnostic(0.85, 0.30, &cfg);
    checklist.check_abs("G at (0.85, 0.30)", m.gate_product, 0.1050, 1e-10);
    checklist.check_flag("(0.85, 0.30) is Safe", m.label == PhaseLabel::SafeZone);
    m.print_summary();

    checklist.check_flag(
        "(0.20, 0.50) is Dead",
        manual_diagnostic(0.20, 0.50, &cfg).label == PhaseLabel::DeadZone,
    );
    checklist.check_flag(
        "(0.20, 0.05) is Dead (precedence)",
        manual_diagnostic(0.20, 0.05, &cfg).label == PhaseLabel::DeadZone,
    );
    checklist.check_flag(
        "(0.80, 0.10) is Danger",
        manual_diagnostic(0.80, 0.10, &cfg).label == PhaseLabel::DangerZone,
    );

    // ═══ ε guard on a constant column ═══
    let report = match run_diagnostic(&constant_h98_batch(), &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("constant-column batch failed: {e}");
            std::process::exit(1);
        }
    };
    checklist.check_flag(
        "constant H98y2 → finite Z",
        report.proxies.z.iter().all(|z| z.is_finite()),
    );
    checklist.check_abs("constant H98y2 → Z ≈ 0", report.proxies.z[0], 0.0, 1e-4);
    checklist.check_flag("degenerate range reported", report.proxies.z_range_degenerate);
    report.print_summary("constant-H98y2 batch");

    // ═══ Excursion trajectory: leaves the rectangle on three walls ═══
    let z = [0.50, 0.20, 0.60, 0.95, 0.60, 0.60];
    let sigma = [0.50, 0.50, 0.50, 0.50, 0.95, 0.50];
    let report = match run_trajectory(&z, &sigma, &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("excursion trajectory failed: {e}");
            std::process::exit(1);
        }
    };
    checklist.check_flag("excursion min distance < 0", report.phase0.min_distance < 0.0);
    for i in [1, 3, 4] {
        checklist.check_flag(
            &format!("excursion sample {i} flagged"),
            report.phase0.phase0_flag[i],
        );
    }
    report.print_summary("excursion trajectory");

    // ═══ dG_crit adapts to the batch ═══
    let quiet = run_trajectory(
        &[0.50, 0.51, 0.52, 0.53, 0.54],
        &[0.5, 0.5, 0.5, 0.5, 0.5],
        &cfg,
    );
    let steep = run_trajectory(
        &[0.50, 0.42, 0.33, 0.22, 0.10],
        &[0.50, 0.58, 0.67, 0.78, 0.90],
        &cfg,
    );
    match (quiet, steep) {
        (Ok(a), Ok(b)) => {
            checklist.check_flag(
                "dG_crit recomputed per batch",
                (a.phase0.dg_crit - b.phase0.dg_crit).abs() > 1e-6,
            );
        }
        _ => checklist.check_flag("dG_crit recomputed per batch", false),
    }

    checklist.finish();
}
