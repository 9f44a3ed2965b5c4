//! Bulk loader: file in, records out
//!
//! The first line is always discarded as a header, whatever it contains. Every
//! later line is split and handed to the layout's mapper; rows the mapper
//! rejects (too few columns, including blank lines) are counted and skipped.
//! Invalid UTF-8 is decoded lossily rather than failing the row. Only failing
//! to open or read the file is an error.

use crate::core::ingest::layouts::{RowLayout, SentinelDefaults};
use crate::core::ingest::splitter::split_fields;
use crate::domain::{Record, Result, ResultExt};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Records produced by one load together with the skip count
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> LoadOutcome<T> {
    /// Number of records loaded
    pub fn loaded(&self) -> usize {
        self.records.len()
    }
}

/// Reads delimited files through a [`RowLayout`]
#[derive(Debug, Clone, Default)]
pub struct BulkLoader {
    defaults: SentinelDefaults,
}

impl BulkLoader {
    pub fn new(defaults: SentinelDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SentinelDefaults {
        &self.defaults
    }

    /// Loads every valid row of `path` using layout `L`
    pub fn load<L: RowLayout>(&self, path: impl AsRef<Path>) -> Result<LoadOutcome<L::Record>> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let outcome = self
            .load_from_reader::<L, _>(BufReader::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))?;

        crate::log_load_complete!(
            <L::Record as Record>::KIND,
            path.display(),
            outcome.loaded(),
            outcome.skipped
        );
        Ok(outcome)
    }

    /// Loads from any buffered reader; the first line is the header
    pub fn load_from_reader<L: RowLayout, R: BufRead>(
        &self,
        mut reader: R,
    ) -> Result<LoadOutcome<L::Record>> {
        let mut records = Vec::new();
        let mut skipped = 0;

        let mut buf = Vec::new();
        let mut index = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            index += 1;
            if index == 1 {
                continue;
            }

            let line = decode_line(&buf);
            let fields = split_fields(&line);
            match L::map_row(&fields, &self.defaults) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    crate::log_row_skipped!(<L::Record as Record>::KIND, index, fields.len());
                }
            }
        }

        Ok(LoadOutcome { records, skipped })
    }
}

// Bytes that are not UTF-8 become U+FFFD so one bad row cannot end the load.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::layouts::{PrescriptionRow, ReferralRow};
    use crate::domain::PrescriptionStatus;
    use std::io::Cursor;

    #[test]
    fn test_header_is_discarded() {
        let data = "prescriptionId,patientId,medication,dosage\nRX1,P1,Aspirin,75mg\n";
        let outcome = BulkLoader::default()
            .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
            .unwrap();

        assert_eq!(outcome.loaded(), 1);
        assert_eq!(outcome.records[0].prescription_id(), "RX1");
    }

    #[test]
    fn test_header_discarded_even_when_it_looks_like_data() {
        let data = "RX0,P0,Aspirin,75mg\nRX1,P1,Aspirin,75mg\n";
        let outcome = BulkLoader::default()
            .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
            .unwrap();
        assert_eq!(outcome.loaded(), 1);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let outcome = BulkLoader::default()
            .load_from_reader::<ReferralRow, _>(Cursor::new(""))
            .unwrap();
        assert_eq!(outcome.loaded(), 0);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_malformed_and_blank_lines_are_skipped() {
        let data = "h\nRX1,P1,Aspirin,75mg\nRX2,P1\n\nRX3,P2,Ibuprofen,200mg,Collected\n";
        let outcome = BulkLoader::default()
            .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
            .unwrap();

        assert_eq!(outcome.loaded(), 2);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.records[1].status, PrescriptionStatus::Collected);
    }

    #[test]
    fn test_invalid_utf8_row_does_not_abort_load() {
        let data: &[u8] =
            b"h\nRX1,P1,Aspirin,75mg\nRX2,P1,Asp\xFFrin,75mg\r\nRX3,P2,Ibuprofen,200mg\n";
        let outcome = BulkLoader::default()
            .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
            .unwrap();

        assert_eq!(outcome.loaded(), 3);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.records[1].medication, "Asp\u{FFFD}rin");
        assert_eq!(outcome.records[1].dosage, "75mg");
        assert_eq!(outcome.records[2].prescription_id(), "RX3");
    }

    #[test]
    fn test_crlf_line_endings_are_trimmed() {
        let data = "h\r\nRX1,P1,Aspirin,75mg,Collected\r\n";
        let outcome = BulkLoader::default()
            .load_from_reader::<PrescriptionRow, _>(Cursor::new(data))
            .unwrap();
        assert_eq!(outcome.records[0].status, PrescriptionStatus::Collected);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BulkLoader::default()
            .load::<PrescriptionRow>("/definitely/not/here.csv")
            .unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("here.csv"));
    }
}
