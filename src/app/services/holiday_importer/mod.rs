//! Holiday importer for national, state and municipal datasets
//!
//! One importer serves all three scopes: the scope selects the dataset, its
//! column count and its row mapping. Every call reads its dataset afresh in a
//! single pass, so repeated imports never share state.

use super::dataset_locator::{DatasetLocator, EmbeddedDatasets};
use super::delimited_reader::read_rows;
use super::record_factory::{RecordContext, build_record, normalize_year};
use super::row_validator::mapper_for;
use crate::app::models::{HolidayRecord, Scope};
use crate::config::{ImportConfig, RowPolicy};
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use stats::{ImportResult, ImportStats};

/// Imports holiday records from the datasets served by a locator
#[derive(Debug, Clone)]
pub struct HolidayImporter<L: DatasetLocator = EmbeddedDatasets> {
    locator: L,
    config: ImportConfig,
}

impl HolidayImporter<EmbeddedDatasets> {
    /// Importer over the embedded datasets
    pub fn embedded(config: ImportConfig) -> Result<Self> {
        Self::new(EmbeddedDatasets::new(), config)
    }
}

impl Default for HolidayImporter<EmbeddedDatasets> {
    fn default() -> Self {
        Self {
            locator: EmbeddedDatasets::new(),
            config: ImportConfig::default(),
        }
    }
}

impl<L: DatasetLocator> HolidayImporter<L> {
    /// Create an importer after validating its configuration
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if the configuration is invalid
    pub fn new(locator: L, config: ImportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { locator, config })
    }

    /// Create an importer that writes the configured label and country
    /// code into records as given, without validating them
    pub(crate) fn unvalidated(locator: L, config: ImportConfig) -> Self {
        Self { locator, config }
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import the holidays of one scope for a year
    ///
    /// Years below 1900 are replaced with the current year. Rows with an
    /// empty required column are dropped; malformed rows and impossible
    /// dates are skipped or fail the import according to the row policy.
    ///
    /// # Returns
    /// * `Result<ImportResult>` - Records in dataset order with statistics
    ///
    /// # Errors
    /// * Returns `Error::DatasetNotFound` if the scope's dataset is absent
    /// * Returns `Error::CsvParsing` or `Error::Io` if the dataset cannot be read
    /// * Returns `Error::MalformedRow` or `Error::InvalidDate` under `RowPolicy::Fail`
    pub fn import(&self, scope: Scope, year: i32) -> Result<ImportResult> {
        let start_time = Instant::now();
        let dataset = scope.dataset_name();
        let year = normalize_year(year);

        info!(
            "Importing {} holidays for {} from {}",
            scope,
            year,
            self.locator.describe(scope)
        );

        let source = self.locator.open(scope)?;
        let outcome = read_rows(source, dataset, scope.column_count(), self.config.row_policy)?;

        let mut stats = ImportStats::new();
        stats.total_rows = outcome.rows.len() + outcome.skipped.len();
        for message in outcome.skipped {
            stats.record_skip(message);
        }

        let context = RecordContext {
            year,
            coverage_scope: self.config.label_for(scope),
            country_code: &self.config.country_code,
        };
        let map_row = mapper_for(scope);
        let mut records = Vec::with_capacity(outcome.rows.len());

        for row in &outcome.rows {
            let built = map_row(row, dataset)
                .and_then(|fields| fields.map(|f| build_record(f, &context)).transpose());

            match built {
                Ok(Some(record)) => {
                    trace!("Line {}: {}", row.line, record);
                    records.push(record);
                }
                Ok(None) => {
                    debug!(
                        "Dropping line {} of {}: required column is empty",
                        row.line, dataset
                    );
                    stats.rows_dropped += 1;
                }
                Err(error) => {
                    if !error.is_row_level() || self.config.row_policy == RowPolicy::Fail {
                        return Err(error);
                    }
                    let message = match &error {
                        Error::MalformedRow { .. } => error.to_string(),
                        _ => format!("{} line {}: {}", dataset, row.line, error),
                    };
                    warn!("Skipping row: {}", message);
                    stats.record_skip(message);
                }
            }
        }

        stats.records_imported = records.len();
        stats.load_duration = start_time.elapsed();

        info!("{} holidays: {}", scope, stats.summary());

        Ok(ImportResult {
            scope,
            year,
            records,
            stats,
        })
    }

    /// Import the holidays of one scope, returning an empty list on failure
    ///
    /// Dataset-level errors are logged and never reach the caller.
    pub fn import_or_empty(&self, scope: Scope, year: i32) -> Vec<HolidayRecord> {
        match self.import(scope, year) {
            Ok(result) => result.into_records(),
            Err(e) => {
                warn!("No {} holidays imported: {}", scope, e);
                Vec::new()
            }
        }
    }

    /// Import every scope in national, state, municipal order
    ///
    /// Scopes that fail are logged and left out of the result.
    pub fn import_all(&self, year: i32) -> Vec<ImportResult> {
        Scope::ALL
            .iter()
            .filter_map(|&scope| match self.import(scope, year) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to import {} holidays: {}", scope, e);
                    None
                }
            })
            .collect()
    }
}
