//! Core business logic for ClinicFlow.
//!
//! # Modules
//!
//! - [`ingest`] - splitting delimited lines, row layouts and the bulk loader
//! - [`export`] - bulk writer and rendered documents
//! - [`store`] - copy-on-read record stores with partial updates and queries
//! - [`referral`] - the referral admission queue
//! - [`verification`] - reload-and-compare checks of written files
//! - [`clinic`] - the composition root tying them together
//!
//! # Workflow
//!
//! 1. **Load**: each configured file is read through its layout into a store
//! 2. **Work**: callers query and patch the stores, and submit referrals
//! 3. **Save**: stores are written back in the canonical layouts
//! 4. **Verify** (optional): written files are reloaded and compared
//!
//! # Example
//!
//! ```rust,no_run
//! use clinicflow::config::load_config;
//! use clinicflow::core::Clinic;
//! use clinicflow::domain::{EntityKind, Referral, UrgencyLevel};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinicflow.toml")?;
//! let mut clinic = Clinic::from_config(&config);
//! clinic.load_configured(&config)?;
//!
//! let referral = Referral::new("REF100", "P001", "GP001", "SPEC004", "Palpitations")
//!     .with_urgency(UrgencyLevel::Urgent);
//! clinic.submit_referral(referral);
//!
//! clinic
//!     .referral_engine()
//!     .persist(config.export.referral_queue_path(), config.export.referral_queue_layout)?;
//! clinic.save_kind(EntityKind::Referral, config.export.output_path("referrals.csv"))?;
//! # Ok(())
//! # }
//! ```

pub mod clinic;
pub mod export;
pub mod ingest;
pub mod referral;
pub mod store;
pub mod verification;

pub use clinic::Clinic;
