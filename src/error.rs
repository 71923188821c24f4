// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for zsigma batch ingestion and diagnostics.
//!
//! Replaces `Result<_, String>` in public APIs with a proper enum so callers
//! can pattern-match on failure modes (missing columns, ragged columns, too
//! few rows) rather than parsing opaque strings.

use std::fmt;

/// Errors arising from batch construction or diagnostic evaluation.
#[derive(Debug)]
pub enum ZsigmaError {
    /// One or more required input columns are absent. Carries every missing
    /// name so the caller can report them all at once.
    MissingColumns(Vec<String>),

    /// A column's length disagrees with the `time` column.
    ColumnLengthMismatch {
        /// Offending column name
        column: String,
        /// Length of the `time` column
        expected: usize,
        /// Length actually supplied
        got: usize,
    },

    /// Fewer than two rows: the gate-product slope is undefined, so the
    /// whole computation is refused before any partial result exists.
    InsufficientData {
        /// Rows actually supplied
        rows: usize,
    },

    /// Discharge file loading failed (path, underlying IO or parse error).
    DataLoad(String),
}

impl fmt::Display for ZsigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns(names) => {
                write!(f, "Missing required columns: {}", names.join(", "))
            }
            Self::ColumnLengthMismatch {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Column '{column}' has {got} rows, expected {expected} (length of 'time')"
                )
            }
            Self::InsufficientData { rows } => {
                write!(
                    f,
                    "Batch has {rows} row(s) — at least 2 are required for the gate-product slope"
                )
            }
            Self::DataLoad(msg) => write!(f, "Discharge loading failed: {msg}"),
        }
    }
}

impl std::error::Error for ZsigmaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_columns_lists_all_names() {
        let err = ZsigmaError::MissingColumns(vec!["P_rad".into(), "f_ELM".into()]);
        let msg = err.to_string();
        assert!(msg.contains("P_rad"));
        assert!(msg.contains("f_ELM"));
    }

    #[test]
    fn display_length_mismatch() {
        let err = ZsigmaError::ColumnLengthMismatch {
            column: "H98y2".into(),
            expected: 12,
            got: 11,
        };
        let msg = err.to_string();
        assert!(msg.contains("H98y2"));
        assert!(msg.contains("12"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn display_insufficient_data() {
        let err = ZsigmaError::InsufficientData { rows: 1 };
        assert!(err.to_string().contains("1 row"));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn error_trait_works() {
        let err = ZsigmaError::DataLoad("shot_4521.json: no such file".into());
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.to_string().contains("shot_4521.json"));
    }
}
