//! Composition root
//!
//! A [`Clinic`] owns one [`RecordStore`] per entity kind, the loader and
//! writer they are filled from and saved through, and the referral engine.
//! The engine is built on first use and every caller gets the same instance.

use crate::config::{supported_layouts, ClinicConfig};
use crate::core::export::BulkWriter;
use crate::core::ingest::layouts::{
    AppointmentRow, AppointmentScheduleRow, ClinicianRow, LayoutVariant, PatientRegistryRow,
    PatientRow, PrescriptionLedgerRow, PrescriptionRow, ReferralRegistryRow, ReferralRow,
    RowLayout,
};
use crate::core::ingest::{BulkLoader, LoadSummary};
use crate::core::referral::ReferralEngine;
use crate::core::store::RecordStore;
use crate::core::verification::{VerificationReport, Verifier};
use crate::domain::{
    Appointment, ClinicError, Clinician, EntityKind, Patient, Prescription, Record, Referral,
    Result,
};
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
pub struct Clinic {
    pub patients: RecordStore<Patient>,
    pub clinicians: RecordStore<Clinician>,
    pub appointments: RecordStore<Appointment>,
    pub prescriptions: RecordStore<Prescription>,
    pub referrals: RecordStore<Referral>,
    loader: BulkLoader,
    writer: BulkWriter,
    engine: OnceLock<Arc<ReferralEngine>>,
}

fn fill<L: RowLayout>(
    loader: &BulkLoader,
    store: &mut RecordStore<L::Record>,
    path: &Path,
) -> Result<(usize, usize)> {
    let outcome = loader.load::<L>(path)?;
    let counts = (outcome.loaded(), outcome.skipped);
    store.load_from(outcome.records);
    Ok(counts)
}

impl Clinic {
    pub fn new(loader: BulkLoader, writer: BulkWriter) -> Self {
        Self {
            loader,
            writer,
            ..Self::default()
        }
    }

    pub fn from_config(config: &ClinicConfig) -> Self {
        Self::new(
            BulkLoader::new(config.ingest.sentinel_defaults()),
            BulkWriter::new().with_quoting(config.export.quote_embedded_separators),
        )
    }

    /// Uses `engine` instead of building the default one
    ///
    /// Has no effect once the engine has been handed out.
    pub fn with_referral_engine(self, engine: Arc<ReferralEngine>) -> Self {
        let _ = self.engine.set(engine);
        self
    }

    /// The shared referral engine, built on first call
    pub fn referral_engine(&self) -> Arc<ReferralEngine> {
        Arc::clone(self.engine.get_or_init(|| {
            tracing::debug!("Creating referral engine");
            Arc::new(ReferralEngine::new())
        }))
    }

    pub fn loader(&self) -> &BulkLoader {
        &self.loader
    }

    pub fn writer(&self) -> &BulkWriter {
        &self.writer
    }

    /// Replaces the `kind` store with the records read from `path`
    ///
    /// # Errors
    ///
    /// `Configuration` when `layout` is not available for `kind`, `Io` when
    /// the file cannot be read.
    pub fn load_kind(
        &mut self,
        kind: EntityKind,
        path: impl AsRef<Path>,
        layout: LayoutVariant,
    ) -> Result<LoadSummary> {
        let path = path.as_ref();
        if !supported_layouts(kind).contains(&layout) {
            return Err(ClinicError::Configuration(format!(
                "Layout '{layout}' is not available for {}",
                kind.plural()
            )));
        }

        let loader = &self.loader;
        let (loaded, skipped) = match (kind, layout) {
            (EntityKind::Patient, LayoutVariant::Registry) => {
                fill::<PatientRegistryRow>(loader, &mut self.patients, path)?
            }
            (EntityKind::Patient, _) => fill::<PatientRow>(loader, &mut self.patients, path)?,
            (EntityKind::Clinician, _) => fill::<ClinicianRow>(loader, &mut self.clinicians, path)?,
            (EntityKind::Appointment, LayoutVariant::Schedule) => {
                fill::<AppointmentScheduleRow>(loader, &mut self.appointments, path)?
            }
            (EntityKind::Appointment, _) => {
                fill::<AppointmentRow>(loader, &mut self.appointments, path)?
            }
            (EntityKind::Prescription, LayoutVariant::Ledger) => {
                fill::<PrescriptionLedgerRow>(loader, &mut self.prescriptions, path)?
            }
            (EntityKind::Prescription, _) => {
                fill::<PrescriptionRow>(loader, &mut self.prescriptions, path)?
            }
            (EntityKind::Referral, LayoutVariant::Registry) => {
                fill::<ReferralRegistryRow>(loader, &mut self.referrals, path)?
            }
            (EntityKind::Referral, _) => fill::<ReferralRow>(loader, &mut self.referrals, path)?,
        };

        let summary = LoadSummary::new(kind, layout, path.display().to_string())
            .with_counts(loaded, skipped);
        summary.log_summary();
        Ok(summary)
    }

    /// Loads every configured source file
    pub fn load_configured(&mut self, config: &ClinicConfig) -> Result<Vec<LoadSummary>> {
        EntityKind::ALL
            .into_iter()
            .map(|kind| self.load_kind(kind, config.data.path_for(kind), config.data.layout_for(kind)))
            .collect()
    }

    /// Writes the `kind` store to `path` in its canonical layout
    pub fn save_kind(&self, kind: EntityKind, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let w = &self.writer;
        match kind {
            EntityKind::Patient => w.write::<PatientRow>(self.patients.as_slice(), path),
            EntityKind::Clinician => w.write::<ClinicianRow>(self.clinicians.as_slice(), path),
            EntityKind::Appointment => {
                w.write::<AppointmentRow>(self.appointments.as_slice(), path)
            }
            EntityKind::Prescription => {
                w.write::<PrescriptionRow>(self.prescriptions.as_slice(), path)
            }
            EntityKind::Referral => w.write::<ReferralRow>(self.referrals.as_slice(), path),
        }
    }

    /// Re-reads a canonical file for `kind` and compares it with the store
    pub fn verify_kind(&self, kind: EntityKind, path: impl AsRef<Path>) -> Result<VerificationReport> {
        let verifier = Verifier::new(self.loader.clone());
        let path = path.as_ref();
        match kind {
            EntityKind::Patient => verifier.verify::<PatientRow>(self.patients.as_slice(), path),
            EntityKind::Clinician => {
                verifier.verify::<ClinicianRow>(self.clinicians.as_slice(), path)
            }
            EntityKind::Appointment => {
                verifier.verify::<AppointmentRow>(self.appointments.as_slice(), path)
            }
            EntityKind::Prescription => {
                verifier.verify::<PrescriptionRow>(self.prescriptions.as_slice(), path)
            }
            EntityKind::Referral => verifier.verify::<ReferralRow>(self.referrals.as_slice(), path),
        }
    }

    /// Adds a new referral to the referral store and admits it to the engine
    ///
    /// A referral with a blank id is refused by both and nothing changes.
    pub fn submit_referral(&mut self, referral: Referral) -> bool {
        if referral.key().trim().is_empty() {
            tracing::warn!(patient_id = %referral.patient_id, "Refused referral with blank id");
            return false;
        }
        self.referrals.insert(referral.clone());
        self.referral_engine().submit(referral)
    }

    /// Number of records held for `kind`
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Patient => self.patients.len(),
            EntityKind::Clinician => self.clinicians.len(),
            EntityKind::Appointment => self.appointments.len(),
            EntityKind::Prescription => self.prescriptions.len(),
            EntityKind::Referral => self.referrals.len(),
        }
    }
}
