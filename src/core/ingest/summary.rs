//! Load summary and reporting

use crate::core::ingest::layouts::LayoutVariant;
use crate::domain::EntityKind;
use serde::Serialize;
use std::fmt;

/// Outcome of loading one file, without the records themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Entity kind that was loaded
    pub kind: EntityKind,

    /// Schema the file was read with
    pub layout: LayoutVariant,

    /// Source path
    pub source: String,

    /// Records accepted into the store
    pub loaded: usize,

    /// Rows the mapper rejected
    pub skipped: usize,
}

impl LoadSummary {
    pub fn new(kind: EntityKind, layout: LayoutVariant, source: impl Into<String>) -> Self {
        Self {
            kind,
            layout,
            source: source.into(),
            loaded: 0,
            skipped: 0,
        }
    }

    pub fn with_counts(mut self, loaded: usize, skipped: usize) -> Self {
        self.loaded = loaded;
        self.skipped = skipped;
        self
    }

    /// Data rows seen after the header
    pub fn total_rows(&self) -> usize {
        self.loaded + self.skipped
    }

    /// True when no row was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }

    /// Percentage of data rows accepted
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_rows() == 0 {
            return 100.0;
        }
        (self.loaded as f64 / self.total_rows() as f64) * 100.0
    }

    pub fn log_summary(&self) {
        tracing::info!(
            kind = %self.kind,
            layout = %self.layout,
            source = %self.source,
            loaded = self.loaded,
            skipped = self.skipped,
            acceptance_rate = format!("{:.2}%", self.acceptance_rate()),
            "Load summary"
        );
        if !self.is_clean() {
            tracing::warn!(
                kind = %self.kind,
                skipped = self.skipped,
                "Some rows were skipped; run with --log-level debug to see line numbers"
            );
        }
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:>6} loaded {:>4} skipped  ({}, {})",
            self.kind.plural(),
            self.loaded,
            self.skipped,
            self.layout,
            self.source
        )
    }
}
