// ClinicFlow - clinical record ingestion and referral workflow
// Copyright (c) 2025 ClinicFlow Contributors
// Licensed under the MIT License

//! # ClinicFlow
//!
//! ClinicFlow keeps a clinic's records in flat comma-separated files and
//! works on them in memory: patients, clinicians, appointments,
//! prescriptions and referrals.
//!
//! ## Overview
//!
//! This library provides:
//! - **Loading** delimited files through per-entity row layouts, skipping
//!   malformed rows and counting them
//! - **Storing** records in copy-on-read stores with partial updates
//! - **Referring** patients through a shared admission queue
//! - **Writing** records back out, plus referral letters and prescription slips
//! - **Verifying** written files by reading them back
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Ingest, export, stores, referral queue, verification
//! - [`domain`] - Records, vocabularies, roles and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinicflow::core::ingest::LayoutVariant;
//! use clinicflow::core::Clinic;
//! use clinicflow::domain::EntityKind;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut clinic = Clinic::default();
//!     let summary = clinic.load_kind(
//!         EntityKind::Prescription,
//!         "data/prescriptions.csv",
//!         LayoutVariant::Canonical,
//!     )?;
//!     println!("Loaded {} prescriptions, skipped {}", summary.loaded, summary.skipped);
//!
//!     for rx in clinic.prescriptions.by_patient("P001") {
//!         println!("{} {}", rx.medication, rx.dosage);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error is
//! [`domain::ClinicError`]. A malformed row is not an error; lookups that
//! find nothing return `None` or `false`.
//!
//! ```rust,no_run
//! use clinicflow::domain::{ClinicError, ResultExt};
//!
//! fn read(path: &str) -> Result<String, ClinicError> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
