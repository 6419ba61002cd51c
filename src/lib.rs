//! Brazilian Holidays Library
//!
//! A Rust library for importing Brazilian holiday reference data (national,
//! state and municipal) from embedded semicolon-delimited datasets into typed
//! holiday records for a given year.
//!
//! This library provides tools for:
//! - Locating the embedded datasets (or substitute datasets on disk)
//! - Reading `;`-delimited rows with explicit malformed-row handling
//! - Validating and coercing fields per coverage scope
//! - Materializing [`HolidayRecord`]s with year substitution
//!
//! ## Usage
//!
//! ```rust
//! use brazilian_holidays::{Scope, import_national_holidays};
//!
//! let holidays = import_national_holidays(2024, None, None);
//! assert!(holidays.iter().all(|h| h.coverage_scope == Scope::National.default_label()));
//! ```

pub mod api;
pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_locator;
        pub mod delimited_reader;
        pub mod holiday_importer;
        pub mod record_factory;
        pub mod row_validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use api::{
    dispose, import_municipal_holidays, import_national_holidays, import_state_holidays,
};
pub use app::models::{HolidayRecord, Scope};
pub use app::services::dataset_locator::{DatasetLocator, DirectoryDatasets, EmbeddedDatasets};
pub use app::services::holiday_importer::{HolidayImporter, ImportResult, ImportStats};
pub use config::{ImportConfig, RowPolicy};

/// Result type alias for holiday import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for holiday import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader failure
    #[error("CSV parsing error in dataset '{dataset}': {message}")]
    CsvParsing {
        dataset: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Dataset for a scope is absent
    #[error("Dataset not found for {scope} holidays: {location}")]
    DatasetNotFound { scope: String, location: String },

    /// A data row could not be used
    #[error("Malformed row in dataset '{dataset}' at line {line}: {message}")]
    MalformedRow {
        dataset: String,
        line: u64,
        message: String,
    },

    /// Month and day do not form a calendar date for the year
    #[error("Invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unknown coverage scope name
    #[error("Unknown holiday scope: {name}")]
    UnknownScope { name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        dataset: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            dataset: dataset.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(scope: impl Into<String>, location: impl Into<String>) -> Self {
        Self::DatasetNotFound {
            scope: scope.into(),
            location: location.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(dataset: impl Into<String>, line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            dataset: dataset.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(year: i32, month: i32, day: i32) -> Self {
        Self::InvalidDate { year, month, day }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown scope error
    pub fn unknown_scope(name: impl Into<String>) -> Self {
        Self::UnknownScope { name: name.into() }
    }

    /// Whether this error concerns a single row rather than the whole dataset
    pub fn is_row_level(&self) -> bool {
        matches!(self, Self::MalformedRow { .. } | Self::InvalidDate { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            dataset: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
