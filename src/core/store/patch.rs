//! Partial updates
//!
//! A patch field of `None`, or a string that is blank after trimming, leaves
//! the record's value as it is.

use crate::domain::{
    Appointment, AppointmentUpdate, Clinician, ClinicianUpdate, Patient, PatientUpdate,
    Prescription, PrescriptionUpdate, Referral, ReferralUpdate,
};

/// A set of field changes applicable to a record of type `T`
pub trait Patch<T> {
    fn apply_to(self, record: &mut T);
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn set(target: &mut String, value: Option<String>) {
    if let Some(v) = supplied(value) {
        *target = v;
    }
}

fn set_opt(target: &mut Option<String>, value: Option<String>) {
    if let Some(v) = supplied(value) {
        *target = Some(v);
    }
}

fn set_copy<V: Copy>(target: &mut V, value: Option<V>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl Patch<Patient> for PatientUpdate {
    fn apply_to(self, p: &mut Patient) {
        set(&mut p.name, self.name);
        set(&mut p.email, self.email);
        set(&mut p.phone, self.phone);
        set(&mut p.nhs_number, self.nhs_number);
        set_opt(&mut p.address, self.address);
        if let Some(history) = supplied(self.medical_history) {
            p.update_medical_history(history);
        }
    }
}

impl Patch<Clinician> for ClinicianUpdate {
    fn apply_to(self, c: &mut Clinician) {
        set(&mut c.first_name, self.first_name);
        set(&mut c.last_name, self.last_name);
        set(&mut c.title, self.title);
        set(&mut c.speciality, self.speciality);
        set(&mut c.gmc_number, self.gmc_number);
        set(&mut c.phone, self.phone);
        set(&mut c.email, self.email);
        set(&mut c.workplace_id, self.workplace_id);
        set(&mut c.workplace_type, self.workplace_type);
        set(&mut c.employment_status, self.employment_status);
        set(&mut c.start_date, self.start_date);
    }
}

impl Patch<Appointment> for AppointmentUpdate {
    fn apply_to(self, a: &mut Appointment) {
        set(&mut a.date_time, self.date_time);
        set(&mut a.location, self.location);
        set_copy(&mut a.status, self.status);
        set(&mut a.reason, self.reason);
    }
}

impl Patch<Prescription> for PrescriptionUpdate {
    fn apply_to(self, p: &mut Prescription) {
        set(&mut p.medication, self.medication);
        set(&mut p.dosage, self.dosage);
        set_opt(&mut p.duration, self.duration);
        set_copy(&mut p.status, self.status);
        set_opt(&mut p.notes, self.notes);
    }
}

impl Patch<Referral> for ReferralUpdate {
    fn apply_to(self, r: &mut Referral) {
        set(&mut r.to_specialist_id, self.to_specialist_id);
        set(&mut r.reason, self.reason);
        set_copy(&mut r.status, self.status);
        set_copy(&mut r.urgency_level, self.urgency_level);
        set_opt(&mut r.clinical_summary, self.clinical_summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, ReferralStatus, UrgencyLevel};

    #[test]
    fn test_clinician_patch_leaves_other_fields() {
        let mut c = Clinician::builder("C1", "Sarah", "Jones")
            .speciality("Cardiology")
            .email("s@nhs.net")
            .build();
        let before = c.clone();

        ClinicianUpdate {
            email: Some("sarah@nhs.net".to_string()),
            ..Default::default()
        }
        .apply_to(&mut c);

        assert_eq!(c.email, "sarah@nhs.net");
        assert_eq!(c.speciality, before.speciality);
        assert_eq!(c.display_name(), before.display_name());
    }

    #[test]
    fn test_referral_patch_allows_any_status() {
        let mut r = Referral::new("R1", "P1", "GP1", "S1", "Rash");
        r.status = ReferralStatus::Completed;

        ReferralUpdate {
            status: Some(ReferralStatus::Pending),
            urgency_level: Some(UrgencyLevel::Emergency),
            ..Default::default()
        }
        .apply_to(&mut r);

        assert_eq!(r.status, ReferralStatus::Pending);
        assert!(r.is_urgent());
        assert_eq!(r.reason, "Rash");
    }

    #[test]
    fn test_appointment_patch_blank_strings_ignored() {
        let mut a = Appointment::new("A1", "P1", "C1", "2024-01-01 09:00", "Main Clinic");
        AppointmentUpdate {
            date_time: Some(String::new()),
            location: Some("Annex".to_string()),
            status: Some(AppointmentStatus::Cancelled),
            reason: None,
        }
        .apply_to(&mut a);

        assert_eq!(a.date_time, "2024-01-01 09:00");
        assert_eq!(a.location, "Annex");
        assert_eq!(a.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_prescription_patch_optional_fields() {
        let mut p = Prescription::new("RX1", "P1", "C001", "Aspirin", "75mg");
        let issued = p.issued_date();
        PrescriptionUpdate {
            duration: Some("28 days".to_string()),
            notes: Some("With food".to_string()),
            ..Default::default()
        }
        .apply_to(&mut p);

        assert_eq!(p.duration.as_deref(), Some("28 days"));
        assert_eq!(p.notes.as_deref(), Some("With food"));
        assert_eq!(p.issued_date(), issued);
    }

    #[test]
    fn test_patient_patch_medical_history() {
        let mut p = Patient::new("P1", "Ann", "a@example.com", "0100", "999");
        PatientUpdate {
            medical_history: Some("Asthma".to_string()),
            ..Default::default()
        }
        .apply_to(&mut p);
        assert_eq!(p.medical_history.as_deref(), Some("Asthma"));
    }
}
