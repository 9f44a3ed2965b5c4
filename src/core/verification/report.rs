//! Verification report structures

use crate::domain::EntityKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Result of reading a written file back and comparing it with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// When the verification was performed
    pub verified_at: DateTime<Utc>,

    /// Entity kind in the file
    pub kind: EntityKind,

    /// Path that was re-read
    pub path: String,

    /// SHA-256 of the file as read
    pub checksum: String,

    /// Number of source records compared
    pub total_verified: usize,

    /// Records that read back identically
    pub passed: usize,

    /// Records that were missing or differed
    pub failed: usize,

    /// Rows read back that match no source record
    pub unexpected: usize,

    /// List of failed verifications with details
    pub failures: Vec<VerificationFailure>,
}

/// One record that did not survive the round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Record key
    pub key: String,

    /// Column that differed, `None` when the record is missing entirely
    pub field: Option<String>,

    pub expected: String,

    pub actual: String,

    /// Reason for failure
    pub reason: String,
}

impl VerificationReport {
    pub fn new(kind: EntityKind, path: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            verified_at: Utc::now(),
            kind,
            path: path.into(),
            checksum: checksum.into(),
            total_verified: 0,
            passed: 0,
            failed: 0,
            unexpected: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_pass(&mut self) {
        self.total_verified += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, failure: VerificationFailure) {
        self.total_verified += 1;
        self.failed += 1;
        self.failures.push(failure);
    }

    pub fn record_unexpected(&mut self) {
        self.unexpected += 1;
    }

    /// Check if every record read back identically
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.unexpected == 0
    }

    /// Get the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_verified == 0 {
            return 100.0;
        }
        (self.passed as f64 / self.total_verified as f64) * 100.0
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        let _ = writeln!(summary, "Verification Report ({})", self.kind.plural());
        let _ = writeln!(summary, "  File: {}", self.path);
        let _ = writeln!(summary, "  SHA-256: {}", self.checksum);
        let _ = writeln!(summary, "  Verified at: {}", self.verified_at);
        let _ = writeln!(summary, "  Total verified: {}", self.total_verified);
        let _ = writeln!(summary, "  Passed: {}", self.passed);
        let _ = writeln!(summary, "  Failed: {}", self.failed);
        let _ = writeln!(summary, "  Unexpected rows: {}", self.unexpected);
        let _ = writeln!(summary, "  Success rate: {:.2}%", self.success_rate());

        if !self.failures.is_empty() {
            summary.push_str("\nFailures:\n");
            for (i, failure) in self.failures.iter().enumerate() {
                let _ = writeln!(summary, "  {}. Record: {}", i + 1, failure.key);
                if let Some(field) = &failure.field {
                    let _ = writeln!(summary, "     Field: {}", field);
                    let _ = writeln!(summary, "     Expected: {:?}", failure.expected);
                    let _ = writeln!(summary, "     Actual: {:?}", failure.actual);
                }
                let _ = writeln!(summary, "     Reason: {}", failure.reason);
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> VerificationReport {
        VerificationReport::new(EntityKind::Referral, "out/referrals.csv", "abc")
    }

    #[test]
    fn test_new_report_is_success() {
        let report = report();
        assert_eq!(report.total_verified, 0);
        assert!(report.is_success());
        assert_eq!(report.success_rate(), 100.0);
    }

    #[test]
    fn test_record_failure() {
        let mut report = report();
        report.record_pass();
        report.record_failure(VerificationFailure {
            key: "R1".to_string(),
            field: Some("reason".to_string()),
            expected: "Pain, left arm".to_string(),
            actual: "Pain".to_string(),
            reason: "Field value changed".to_string(),
        });

        assert_eq!(report.total_verified, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        assert_eq!(report.success_rate(), 50.0);
    }

    #[test]
    fn test_unexpected_rows_fail_report() {
        let mut report = report();
        report.record_pass();
        report.record_unexpected();
        assert!(!report.is_success());
    }

    #[test]
    fn test_format_summary_lists_failures() {
        let mut report = report();
        report.record_failure(VerificationFailure {
            key: "R9".to_string(),
            field: None,
            expected: String::new(),
            actual: String::new(),
            reason: "Record missing after reload".to_string(),
        });
        let text = report.format_summary();
        assert!(text.contains("Record: R9"));
        assert!(text.contains("Record missing after reload"));
        assert!(text.contains("SHA-256: abc"));
    }
}
