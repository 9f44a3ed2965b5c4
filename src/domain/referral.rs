//! Referral record

use super::kind::{EntityKind, Record};
use super::status::{ReferralStatus, UrgencyLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A referral from a GP to a specialist
///
/// `referral_date` is stamped when the value is constructed. The status is
/// free to move in any direction; see [`ReferralStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    referral_id: String,
    pub patient_id: String,
    pub from_gp_id: String,
    pub to_specialist_id: String,
    pub reason: String,
    pub status: ReferralStatus,
    referral_date: NaiveDate,
    pub urgency_level: UrgencyLevel,
    pub clinical_summary: Option<String>,
}

impl Referral {
    /// Creates a Pending, Routine referral dated today
    pub fn new(
        referral_id: impl Into<String>,
        patient_id: impl Into<String>,
        from_gp_id: impl Into<String>,
        to_specialist_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            referral_id: referral_id.into(),
            patient_id: patient_id.into(),
            from_gp_id: from_gp_id.into(),
            to_specialist_id: to_specialist_id.into(),
            reason: reason.into(),
            status: ReferralStatus::default(),
            referral_date: super::today(),
            urgency_level: UrgencyLevel::default(),
            clinical_summary: None,
        }
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency_level = urgency;
        self
    }

    pub fn with_clinical_summary(mut self, summary: impl Into<String>) -> Self {
        self.clinical_summary = Some(summary.into());
        self
    }

    pub fn referral_id(&self) -> &str {
        &self.referral_id
    }

    pub fn referral_date(&self) -> NaiveDate {
        self.referral_date
    }

    /// Marks the referral Completed
    pub fn close(&mut self) {
        self.status = ReferralStatus::Completed;
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency_level.is_urgent()
    }
}

impl Record for Referral {
    const KIND: EntityKind = EntityKind::Referral;

    fn key(&self) -> &str {
        &self.referral_id
    }
}

/// Partial update for a [`Referral`]. Blank values leave the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralUpdate {
    pub to_specialist_id: Option<String>,
    pub reason: Option<String>,
    pub status: Option<ReferralStatus>,
    pub urgency_level: Option<UrgencyLevel>,
    pub clinical_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_referral_defaults() {
        let r = Referral::new("REF001", "P001", "GP001", "SPEC001", "Cardiology consultation");
        assert_eq!(r.referral_id(), "REF001");
        assert_eq!(r.status, ReferralStatus::Pending);
        assert_eq!(r.urgency_level, UrgencyLevel::Routine);
        assert_eq!(r.referral_date(), crate::domain::today());
        assert!(!r.is_urgent());
    }

    #[test]
    fn test_completed_referral_can_be_reopened() {
        let mut r = Referral::new("REF001", "P001", "GP001", "SPEC001", "Cardiology consultation");
        r.close();
        assert_eq!(r.status, ReferralStatus::Completed);

        r.status = ReferralStatus::Pending;
        assert_eq!(r.status, ReferralStatus::Pending);
    }

    #[test]
    fn test_builders() {
        let r = Referral::new("REF002", "P002", "GP001", "SPEC002", "Neurology")
            .with_urgency(UrgencyLevel::Emergency)
            .with_clinical_summary("Sudden onset headache");
        assert!(r.is_urgent());
        assert_eq!(r.clinical_summary.as_deref(), Some("Sudden onset headache"));
    }
}
