// SPDX-License-Identifier: AGPL-3.0-only

//! Discharge sample rows and batch ingestion.
//!
//! The core consumes a `Batch`: an ordered, time-ascending sequence of rows
//! carrying the raw observables. Three ways in:
//!   - `Batch::from_samples` — rows already typed by the caller
//!   - `Batch::from_columns` — the external collaborator's
//!     "column name → numeric sequence" contract (names case-sensitive)
//!   - `Batch::load_discharge` — JSON discharge file for the CLI
//!
//! Rows are taken in the order supplied and never re-sorted; time ordering
//! is the caller's contract.

use crate::error::ZsigmaError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Required input column names, case-sensitive, exact match.
pub const REQUIRED_COLUMNS: [&str; 6] = ["time", "H98y2", "P_rad", "P_input", "f_ELM", "DeltaW_ELM"];

/// Optional informational column (carried through, unused downstream).
pub const OPTIONAL_COLUMN: &str = "tau_E";

/// One input row of raw diagnostic observables.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    /// Timestamp (seconds into the discharge)
    pub time: f64,
    /// Confinement quality factor
    #[serde(rename = "H98y2")]
    pub h98y2: f64,
    /// Radiated power
    #[serde(rename = "P_rad")]
    pub p_rad: f64,
    /// Input heating power
    #[serde(rename = "P_input")]
    pub p_input: f64,
    /// ELM frequency
    #[serde(rename = "f_ELM")]
    pub f_elm: f64,
    /// Stored-energy loss per ELM
    #[serde(rename = "DeltaW_ELM")]
    pub delta_w_elm: f64,
    /// Energy confinement time (informational only)
    #[serde(rename = "tau_E", default)]
    pub tau_e: Option<f64>,
}

/// An ordered, time-ascending sequence of samples.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// Rows in supplied order
    pub samples: Vec<Sample>,
}

/// On-disk discharge file shape: `{"samples": [...]}`.
#[derive(Debug, Deserialize)]
struct DischargeFile {
    samples: Vec<Sample>,
}

impl Batch {
    /// Wrap already-typed rows. Order is preserved as supplied.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build a batch from a column table.
    ///
    /// # Errors
    ///
    /// `MissingColumns` if any required name is absent (all missing names are
    /// listed); `ColumnLengthMismatch` if any column disagrees with `time` in
    /// length. No partial batch is ever produced.
    pub fn from_columns(columns: &HashMap<String, Vec<f64>>) -> Result<Self, ZsigmaError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| !columns.contains_key(name))
            .map(|&name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ZsigmaError::MissingColumns(missing));
        }

        let n = columns["time"].len();
        for &name in &REQUIRED_COLUMNS {
            let got = columns[name].len();
            if got != n {
                return Err(ZsigmaError::ColumnLengthMismatch {
                    column: name.to_string(),
                    expected: n,
                    got,
                });
            }
        }
        let tau = columns.get(OPTIONAL_COLUMN);
        if let Some(tau_col) = tau {
            if tau_col.len() != n {
                return Err(ZsigmaError::ColumnLengthMismatch {
                    column: OPTIONAL_COLUMN.to_string(),
                    expected: n,
                    got: tau_col.len(),
                });
            }
        }

        let samples = (0..n)
            .map(|i| Sample {
                time: columns["time"][i],
                h98y2: columns["H98y2"][i],
                p_rad: columns["P_rad"][i],
                p_input: columns["P_input"][i],
                f_elm: columns["f_ELM"][i],
                delta_w_elm: columns["DeltaW_ELM"][i],
                tau_e: tau.map(|col| col[i]),
            })
            .collect();
        Ok(Self { samples })
    }

    /// Load a JSON discharge file: `{"samples": [{"time": ..., "H98y2": ...}, ...]}`.
    ///
    /// Uses streaming `from_reader` so large discharge records are not
    /// buffered as an intermediate string.
    ///
    /// # Errors
    ///
    /// `DataLoad` wrapping the path and the underlying IO or parse error.
    pub fn load_discharge(path: &Path) -> Result<Self, ZsigmaError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ZsigmaError::DataLoad(format!("{}: {e}", path.display())))?;
        let reader = std::io::BufReader::new(file);
        let parsed: DischargeFile = serde_json::from_reader(reader)
            .map_err(|e| ZsigmaError::DataLoad(format!("{}: {e}", path.display())))?;
        Ok(Self {
            samples: parsed.samples,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the batch has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
