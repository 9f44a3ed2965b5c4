//! Ingest: splitting delimited lines and mapping them to records
//!
//! ```rust
//! use clinicflow::core::ingest::{BulkLoader, PrescriptionRow};
//! use std::io::Cursor;
//!
//! let data = "prescriptionId,patientId,medication,dosage\nRX1,P1,Aspirin,75mg\n";
//! let outcome = BulkLoader::default()
//!     .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
//!     .unwrap();
//! assert_eq!(outcome.loaded(), 1);
//! assert_eq!(outcome.records[0].clinician_id, "C001");
//! ```

pub mod layouts;
pub mod loader;
pub mod splitter;
pub mod summary;

pub use layouts::{
    AppointmentRow, AppointmentScheduleRow, CanonicalLayout, ClinicianRow, LayoutVariant,
    PatientRegistryRow, PatientRow, PrescriptionLedgerRow, PrescriptionRow, ReferralRegistryRow,
    ReferralRow, RowLayout, SentinelDefaults,
};
pub use loader::{BulkLoader, LoadOutcome};
pub use splitter::{clean_field, split_fields};
pub use summary::LoadSummary;
