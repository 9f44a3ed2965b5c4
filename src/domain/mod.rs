//! Domain models and types for ClinicFlow.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Patient`], [`Clinician`], [`Appointment`], [`Prescription`], [`Referral`])
//! - **Vocabularies** ([`AppointmentStatus`], [`PrescriptionStatus`], [`ReferralStatus`], [`UrgencyLevel`])
//! - **Members and roles** ([`Member`], [`Role`], [`UserIdentity`])
//! - **Error types** ([`ClinicError`]) and the [`Result`] alias
//!
//! Every record has a caller-assigned key that is set at construction and
//! never changes; it is exposed read-only through [`Record::key`].
//!
//! ```rust
//! use clinicflow::domain::{Referral, ReferralStatus, UrgencyLevel};
//!
//! let referral = Referral::new("REF001", "P001", "GP001", "SPEC001", "Chest pain")
//!     .with_urgency(UrgencyLevel::Urgent);
//! assert_eq!(referral.status, ReferralStatus::Pending);
//! assert!(referral.is_urgent());
//! ```

pub mod appointment;
pub mod clinician;
pub mod context;
pub mod errors;
pub mod kind;
pub mod patient;
pub mod prescription;
pub mod referral;
pub mod result;
pub mod role;
pub mod status;

pub use appointment::{Appointment, AppointmentUpdate};
pub use clinician::{Clinician, ClinicianBuilder, ClinicianUpdate};
pub use context::ResultExt;
pub use errors::ClinicError;
pub use kind::{EntityKind, Record};
pub use patient::{Patient, PatientUpdate};
pub use prescription::{Prescription, PrescriptionUpdate};
pub use referral::{Referral, ReferralUpdate};
pub use result::Result;
pub use role::{Member, Role, UserIdentity};
pub use status::{AppointmentStatus, PrescriptionStatus, ReferralStatus, UrgencyLevel};

/// Current local date, used to stamp issued and referral dates
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
