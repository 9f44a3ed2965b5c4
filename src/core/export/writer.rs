//! Bulk writer: records out to the canonical delimited schema
//!
//! Output is the layout's fixed header followed by one comma-joined line per
//! record. Fields are written verbatim unless quoting is switched on, so a
//! value containing a comma splits into two columns when read back.

use crate::core::ingest::layouts::CanonicalLayout;
use crate::core::ingest::splitter::SEPARATOR;
use crate::domain::{Record, Result, ResultExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct BulkWriter {
    quote_embedded_separators: bool,
}

impl BulkWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap fields that contain the separator or a quote in double quotes
    ///
    /// Embedded quotes are dropped since the loader strips them on read.
    pub fn with_quoting(mut self, enabled: bool) -> Self {
        self.quote_embedded_separators = enabled;
        self
    }

    pub fn quotes_embedded_separators(&self) -> bool {
        self.quote_embedded_separators
    }

    /// Writes `records` to `path`, replacing any existing file
    ///
    /// Returns the number of data rows written.
    pub fn write<L: CanonicalLayout>(
        &self,
        records: &[L::Record],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        let count = self
            .write_to::<L, _>(records, &mut out)
            .and_then(|count| {
                out.flush()?;
                Ok(count)
            })
            .with_context(|| format!("Failed to write {}", path.display()))?;

        crate::log_write_complete!(<L::Record as Record>::KIND, path.display(), count);
        Ok(count)
    }

    /// Writes header and rows to any writer
    pub fn write_to<L: CanonicalLayout, W: Write>(
        &self,
        records: &[L::Record],
        out: &mut W,
    ) -> Result<usize> {
        writeln!(out, "{}", L::HEADER)?;
        for record in records {
            writeln!(out, "{}", self.format_row(&L::to_row(record)))?;
        }
        Ok(records.len())
    }

    /// Joins one row's fields with the separator
    pub fn format_row(&self, fields: &[String]) -> String {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(SEPARATOR);
            }
            if self.quote_embedded_separators && needs_quoting(field) {
                line.push('"');
                line.extend(field.chars().filter(|&c| c != '"'));
                line.push('"');
            } else {
                line.push_str(field);
            }
        }
        line
    }
}

fn needs_quoting(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"')
}
