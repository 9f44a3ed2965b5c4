//! Human-readable documents rendered from a single record
//!
//! Both templates are fixed text with the record's values substituted in.

use crate::domain::{Prescription, Referral, Result, ResultExt};
use std::fmt::Write as _;
use std::path::Path;

const RULE: &str = "================================================";
const THIN_RULE: &str = "------------------------------------------------";

/// Formats a referral as a letter from the referring GP
pub fn render_referral_letter(referral: &Referral) -> String {
    let mut out = String::new();
    let summary = referral
        .clinical_summary
        .as_deref()
        .unwrap_or("No summary provided.");

    // write! into a String cannot fail
    let _ = write!(
        out,
        "{RULE}\n              NHS REFERRAL LETTER               \n{RULE}\n\n\
         Date: {date}\n\
         Urgency: {urgency}\n\n\
         FROM: GP ID {from}\n\
         TO:   Specialist ID {to}\n\n\
         RE:   PATIENT {patient}\n\n\
         Dear Colleague,\n\n\
         I would appreciate your assessment of this patient.\n\
         Reason for referral: {reason}\n\n\
         Clinical Summary:\n\
         {summary}\n\n\
         Sincerely,\n\
         NHS GP Service",
        date = referral.referral_date(),
        urgency = referral.urgency_level,
        from = referral.from_gp_id,
        to = referral.to_specialist_id,
        patient = referral.patient_id,
        reason = referral.reason,
    );
    out
}

/// Formats a prescription as a dispensing slip
pub fn render_prescription_slip(prescription: &Prescription) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{RULE}\n              NHS PRESCRIPTION SLIP             \n{RULE}\n\n\
         Date Issued: {date}\n\
         Prescription ID: {id}\n\n\
         PATIENT ID: {patient}\n\
         PRESCRIBER: {prescriber}\n\n\
         {THIN_RULE}\nMEDICATION DETAILS\n{THIN_RULE}\n\
         Drug:    {drug}\n\
         Dosage:  {dosage}\n\
         Status:  {status}\n\n\
         {THIN_RULE}\nINSTRUCTIONS\n{THIN_RULE}\n\
         Take as directed by your healthcare provider.\n\
         Complete the full course of medication.\n\n\
         {RULE}\n        NHS Healthcare Management System        \n{RULE}\n",
        date = prescription.issued_date(),
        id = prescription.prescription_id(),
        patient = prescription.patient_id,
        prescriber = prescription.clinician_id,
        drug = prescription.medication,
        dosage = prescription.dosage,
        status = prescription.status,
    );
    out
}

/// Renders the referral letter to `path`
pub fn write_referral_letter(referral: &Referral, path: impl AsRef<Path>) -> Result<()> {
    write_document(&render_referral_letter(referral), path.as_ref())
}

/// Renders the prescription slip to `path`
pub fn write_prescription_slip(prescription: &Prescription, path: impl AsRef<Path>) -> Result<()> {
    write_document(&render_prescription_slip(prescription), path.as_ref())
}

fn write_document(text: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Document generated");
    Ok(())
}
