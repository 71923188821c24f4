// SPDX-License-Identifier: AGPL-3.0-only

//! Run the Z–Σ diagnostic over discharge JSON files.
//!
//! ```text
//! diagnose [--json] [--d-crit=0.05] [--percentile=90] shot1.json shot2.json ...
//! ```
//!
//! Each file is an independent batch; files are processed in parallel and
//! reported in input order. `--json` emits the serialized report instead of
//! the human summary. Exit 0 if every file produced a report, 1 otherwise.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use zsigma::config::DiagConfig;
use zsigma::data::Batch;
use zsigma::error::ZsigmaError;
use zsigma::pipeline::run_diagnostic;
use zsigma::report::DiagnosticReport;

struct Args {
    json: bool,
    config: DiagConfig,
    paths: Vec<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args {
        json: false,
        config: DiagConfig::default(),
        paths: Vec::new(),
    };
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            args.json = true;
        } else if let Some(v) = arg.strip_prefix("--d-crit=") {
            match v.parse() {
                Ok(d) => args.config.d_crit = d,
                Err(_) => eprintln!("  WARNING: bad --d-crit value '{v}', keeping default"),
            }
        } else if let Some(v) = arg.strip_prefix("--percentile=") {
            match v.parse() {
                Ok(p) => args.config.slope_percentile = p,
                Err(_) => eprintln!("  WARNING: bad --percentile value '{v}', keeping default"),
            }
        } else if arg.starts_with("--") {
            eprintln!("  WARNING: unknown flag '{arg}' ignored");
        } else {
            args.paths.push(PathBuf::from(arg));
        }
    }
    args
}

fn diagnose_file(path: &Path, config: &DiagConfig) -> Result<DiagnosticReport, ZsigmaError> {
    let batch = Batch::load_discharge(path)?;
    run_diagnostic(&batch, config)
}

fn main() {
    let args = parse_args();
    if args.paths.is_empty() {
        eprintln!("usage: diagnose [--json] [--d-crit=X] [--percentile=P] <discharge.json>...");
        std::process::exit(1);
    }

    // One isolated computation per file; no shared mutable state between them.
    let results: Vec<Result<DiagnosticReport, ZsigmaError>> = args
        .paths
        .par_iter()
        .map(|path| diagnose_file(path, &args.config))
        .collect();

    let mut failures = 0usize;
    for (path, result) in args.paths.iter().zip(results) {
        match result {
            Ok(report) => {
                if args.json {
                    match serde_json::to_string_pretty(&report) {
                        Ok(text) => println!("{text}"),
                        Err(e) => {
                            eprintln!("{}: serialization failed: {e}", path.display());
                            failures += 1;
                        }
                    }
                } else {
                    report.print_summary(&path.display().to_string());
                }
            }
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} file(s) failed");
        std::process::exit(1);
    }
}
