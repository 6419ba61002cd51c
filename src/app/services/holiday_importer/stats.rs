//! Import statistics and result structures
//!
//! Tracks how many rows a dataset held and what became of them, and groups
//! the imported records with those statistics.

use crate::app::models::{HolidayRecord, Scope};
use std::time::Duration;

/// Imported records with basic statistics
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Scope of the imported dataset
    pub scope: Scope,

    /// Year used for every record (after normalization)
    pub year: i32,

    /// Imported records in dataset order
    pub records: Vec<HolidayRecord>,

    /// Import statistics
    pub stats: ImportStats,
}

impl ImportResult {
    /// Whether the dataset yielded no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the records, dropping the statistics
    pub fn into_records(self) -> Vec<HolidayRecord> {
        self.records
    }
}

/// Import statistics for one dataset
#[derive(Debug, Clone)]
pub struct ImportStats {
    /// Data lines encountered (header excluded, blank lines excluded)
    pub total_rows: usize,

    /// Records produced
    pub records_imported: usize,

    /// Rows dropped because a required column was empty
    pub rows_dropped: usize,

    /// Rows skipped as malformed or carrying an invalid date
    pub rows_skipped: usize,

    /// Messages for skipped rows
    pub errors: Vec<String>,

    /// Time taken by the import
    pub load_duration: Duration,
}

impl ImportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            records_imported: 0,
            rows_dropped: 0,
            rows_skipped: 0,
            errors: Vec::new(),
            load_duration: Duration::ZERO,
        }
    }

    /// Record a skipped row
    pub fn record_skip(&mut self, message: impl Into<String>) {
        self.rows_skipped += 1;
        self.errors.push(message.into());
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_imported as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if any rows were skipped with an error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the import
    pub fn summary(&self) -> String {
        format!(
            "Imported {} of {} rows ({:.1}%, {} dropped, {} skipped) in {:.3}s",
            self.records_imported,
            self.total_rows,
            self.success_rate(),
            self.rows_dropped,
            self.rows_skipped,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
