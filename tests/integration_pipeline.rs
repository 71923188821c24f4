// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: full pipeline public API. Ingestion, batch and manual
//! modes, error contracts, serialization.

use std::collections::HashMap;
use zsigma::config::DiagConfig;
use zsigma::data::{Batch, Sample};
use zsigma::error::ZsigmaError;
use zsigma::phase::PhaseLabel;
use zsigma::pipeline::{manual_diagnostic, run_diagnostic};

fn ramp_discharge(n: usize) -> Batch {
    Batch::from_samples(
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                Sample {
                    time: t,
                    h98y2: 0.7 + 0.4 * t,
                    p_rad: 2.0 + 4.0 * t,
                    p_input: 10.0,
                    f_elm: 0.3 + 0.5 * t,
                    delta_w_elm: 0.05 + 0.05 * t,
                    tau_e: Some(0.15),
                }
            })
            .collect(),
    )
}

#[test]
fn end_to_end_batch_diagnostic() {
    let report = run_diagnostic(&ramp_discharge(30), &DiagConfig::default()).unwrap();
    assert_eq!(report.len(), 30);
    assert_eq!(report.gate.g.len(), 30);
    assert_eq!(report.gate.dgdt.len(), 30);
    assert_eq!(report.phase0.distance_to_wall.len(), 30);
    // gate product stays inside [0, 1] for in-range proxies
    for &g in &report.gate.g {
        assert!((0.0..=1.0).contains(&g), "g={g}");
    }
    assert_eq!(report.proxies.non_finite_count(), 0);
}

#[test]
fn gate_vanishes_where_proxies_hit_the_edges() {
    let report = run_diagnostic(&ramp_discharge(10), &DiagConfig::default()).unwrap();
    // The max-H98y2 sample normalizes to Z ≈ 1, so its gate product ≈ 0.
    let (i_zmax, _) = report
        .proxies
        .z
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert!(report.gate.g[i_zmax].abs() < 1e-3);
}

#[test]
fn missing_columns_fail_before_any_result() {
    let mut cols: HashMap<String, Vec<f64>> = HashMap::new();
    cols.insert("time".into(), vec![0.0, 1.0]);
    cols.insert("H98y2".into(), vec![0.9, 1.0]);
    // P_rad, P_input, f_ELM, DeltaW_ELM all absent
    let err = Batch::from_columns(&cols).unwrap_err();
    match err {
        ZsigmaError::MissingColumns(names) => {
            assert_eq!(names.len(), 4);
            for name in ["P_rad", "P_input", "f_ELM", "DeltaW_ELM"] {
                assert!(names.contains(&name.to_string()), "missing {name}");
            }
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn short_batches_are_refused_with_the_typed_error() {
    let cfg = DiagConfig::default();
    let one = Batch::from_samples(ramp_discharge(30).samples[..1].to_vec());
    assert!(matches!(
        run_diagnostic(&one, &cfg),
        Err(ZsigmaError::InsufficientData { rows: 1 })
    ));
}

#[test]
fn manual_mode_matches_reference_scenarios() {
    let cfg = DiagConfig::default();

    let m = manual_diagnostic(0.85, 0.30, &cfg);
    assert!((m.gate_product - 0.1050).abs() < 1e-10);
    assert_eq!(m.label, PhaseLabel::SafeZone);

    assert_eq!(
        manual_diagnostic(0.2, 0.5, &cfg).label,
        PhaseLabel::DeadZone
    );
    assert_eq!(
        manual_diagnostic(0.8, 0.1, &cfg).label,
        PhaseLabel::DangerZone
    );
    // precedence: the dead-zone check runs first
    assert_eq!(
        manual_diagnostic(0.2, 0.05, &cfg).label,
        PhaseLabel::DeadZone
    );
}

#[test]
fn repeated_runs_are_bit_identical() {
    let batch = ramp_discharge(25);
    let cfg = DiagConfig::default();
    let a = run_diagnostic(&batch, &cfg).unwrap();
    let b = run_diagnostic(&batch, &cfg).unwrap();
    for (x, y) in a.proxies.sigma.iter().zip(&b.proxies.sigma) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    for (x, y) in a.gate.dgdt.iter().zip(&b.gate.dgdt) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(a.phase0.dg_crit.to_bits(), b.phase0.dg_crit.to_bits());
}

#[test]
fn report_export_round_trips_through_json() {
    let report = run_diagnostic(&ramp_discharge(6), &DiagConfig::default()).unwrap();
    let text = serde_json::to_string_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["proxies"]["z"].as_array().unwrap().len(), 6);
    assert_eq!(value["phase0"]["phase0_flag"].as_array().unwrap().len(), 6);
    assert!(value["phase0"]["dg_crit"].is_number());
}

#[test]
fn config_overrides_change_detection() {
    let batch = ramp_discharge(20);
    let default_report = run_diagnostic(&batch, &DiagConfig::default()).unwrap();
    // An absurdly wide proximity band flags everything.
    let wide = DiagConfig {
        d_crit: 1.0,
        ..DiagConfig::default()
    };
    let wide_report = run_diagnostic(&batch, &wide).unwrap();
    assert_eq!(wide_report.phase0.flagged_count, 20);
    assert!(wide_report.phase0.flagged_count >= default_report.phase0.flagged_count);
}
