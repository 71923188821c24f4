// SPDX-License-Identifier: AGPL-3.0-only

//! zsigma — Z–Σ control-space diagnostic for energy-confinement processes.
//!
//! Derives two normalized coordinates from a discharge time series (a
//! confinement proxy Z and an entropy-export proxy Σ) and evaluates the
//! trajectory against a fixed safe rectangle in (Z, Σ) space, the Sandy
//! Square. The scalar Gate Product G = (1 − Z)·Σ and its slope feed a
//! Phase-0 early-warning signal that fires on wall proximity or abnormally
//! fast G growth.
//!
//! The pipeline is a deterministic transform over a finite sample batch:
//! pure functions, no shared mutable state, full recomputation per batch.
//!
//! ## Modules
//!   - `data` — sample rows, batch ingestion (columns, JSON discharge files)
//!   - `proxy` — (Z, Σ) normalization with ε guard
//!   - `gate` — gate product and finite-difference slope
//!   - `phase` — scalar-mode zone classification
//!   - `phase0` — early-warning flags and summary
//!   - `pipeline` — batch / trajectory / manual entry points
//!   - `bounds`, `config`, `tolerances` — geometry and tunables
//!   - `error` — typed failure modes
//!   - `validation` — check harness shared by validation binaries
//!
//! ## Validation binaries
//!   - `validate_diagnostic` — pinned reference scenarios, exit 0/1
//!   - `diagnose` — run the diagnostic over discharge JSON files

pub mod bounds;
pub mod config;
pub mod data;
pub mod error;
pub mod gate;
pub mod phase;
pub mod phase0;
pub mod pipeline;
pub mod proxy;
pub mod report;
pub mod stats;
pub mod tolerances;
pub mod validation;
