//! Round-trip verification of written files
//!
//! A written file is read back through the same layout and every source
//! record is compared column by column with what the loader produced. Values
//! containing the separator do not survive an unquoted write, and this is
//! where that shows up.

use crate::core::ingest::layouts::CanonicalLayout;
use crate::core::ingest::loader::BulkLoader;
use crate::core::verification::checksum::calculate_file_checksum;
use crate::core::verification::report::{VerificationFailure, VerificationReport};
use crate::domain::{Record, Result};
use std::collections::{HashMap, VecDeque};
use std::path::Path;

/// Verifier for post-write validation
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    loader: BulkLoader,
}

impl Verifier {
    pub fn new(loader: BulkLoader) -> Self {
        Self { loader }
    }

    /// Reloads `path` with layout `L` and compares it against `expected`
    ///
    /// Records are matched by key, repeated keys pairing up in order. A source
    /// record with no reloaded row, or whose reloaded row differs in any
    /// column, is a failure. Reloaded rows left unpaired are unexpected.
    pub fn verify<L: CanonicalLayout>(
        &self,
        expected: &[L::Record],
        path: impl AsRef<Path>,
    ) -> Result<VerificationReport> {
        let path = path.as_ref();
        let checksum = calculate_file_checksum(path)?;
        let outcome = self.loader.load::<L>(path)?;
        let mut report = VerificationReport::new(
            <L::Record as Record>::KIND,
            path.display().to_string(),
            checksum,
        );

        tracing::info!(
            kind = %report.kind,
            path = %report.path,
            expected = expected.len(),
            reloaded = outcome.loaded(),
            "Starting post-write verification"
        );

        // Keys may repeat; each source record consumes the next reloaded row
        // with its key, in file order.
        let mut reloaded: HashMap<String, VecDeque<Vec<String>>> = HashMap::new();
        for record in &outcome.records {
            reloaded
                .entry(record.key().to_string())
                .or_default()
                .push_back(L::to_row(record));
        }
        report.unexpected += outcome.skipped;

        let columns: Vec<&str> = L::HEADER.split(',').collect();
        for record in expected {
            let key = record.key();
            let Some(actual) = reloaded.get_mut(key).and_then(VecDeque::pop_front) else {
                report.record_failure(VerificationFailure {
                    key: key.to_string(),
                    field: None,
                    expected: String::new(),
                    actual: String::new(),
                    reason: "Record missing after reload".to_string(),
                });
                continue;
            };

            match first_difference(&L::to_row(record), &actual) {
                None => report.record_pass(),
                Some((index, want, got)) => {
                    tracing::warn!(key = %key, column = index, "Record changed on reload");
                    report.record_failure(VerificationFailure {
                        key: key.to_string(),
                        field: columns.get(index).map(|c| c.to_string()),
                        expected: want,
                        actual: got,
                        reason: "Field value changed".to_string(),
                    });
                }
            }
        }
        report.unexpected += reloaded.values().map(VecDeque::len).sum::<usize>();

        tracing::info!(
            kind = %report.kind,
            passed = report.passed,
            failed = report.failed,
            unexpected = report.unexpected,
            checksum = %report.checksum,
            "Verification completed"
        );

        Ok(report)
    }
}

fn first_difference(expected: &[String], actual: &[String]) -> Option<(usize, String, String)> {
    let width = expected.len().max(actual.len());
    (0..width).find_map(|i| {
        let want = expected.get(i).map(String::as_str).unwrap_or_default();
        let got = actual.get(i).map(String::as_str).unwrap_or_default();
        (want != got).then(|| (i, want.to_string(), got.to_string()))
    })
}
