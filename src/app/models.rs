//! Data models for holiday imports
//!
//! This module contains the coverage scope enumeration and the celebrated
//! holiday record produced by every importer.

use crate::constants::{columns, coverage_labels, datasets};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Coverage Scope Enumeration
// =============================================================================

/// Jurisdictional level of a holiday dataset
///
/// Each scope owns one embedded dataset with a fixed column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Holidays observed across the whole country
    National,

    /// Holidays observed in a single state (UF)
    State,

    /// City anniversaries
    Municipal,
}

impl Scope {
    /// All scopes in import order
    pub const ALL: [Scope; 3] = [Scope::National, Scope::State, Scope::Municipal];

    /// Machine-readable name
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::National => "national",
            Scope::State => "state",
            Scope::Municipal => "municipal",
        }
    }

    /// Coverage label written into records when the caller does not override it
    pub fn default_label(self) -> &'static str {
        match self {
            Scope::National => coverage_labels::NATIONAL,
            Scope::State => coverage_labels::STATE,
            Scope::Municipal => coverage_labels::MUNICIPAL,
        }
    }

    /// Number of declared columns in this scope's dataset
    pub fn column_count(self) -> usize {
        match self {
            Scope::National => columns::NATIONAL,
            Scope::State => columns::STATE,
            Scope::Municipal => columns::MUNICIPAL,
        }
    }

    /// File name of this scope's dataset
    pub fn dataset_name(self) -> &'static str {
        match self {
            Scope::National => datasets::NATIONAL,
            Scope::State => datasets::STATE,
            Scope::Municipal => datasets::MUNICIPAL,
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "national" | "nacional" => Ok(Scope::National),
            "state" | "estadual" => Ok(Scope::State),
            "municipal" => Ok(Scope::Municipal),
            _ => Err(Error::unknown_scope(s)),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Holiday Record Structure
// =============================================================================

/// A celebrated holiday occurrence
///
/// Records are plain values: the importers validate their inputs before
/// calling [`HolidayRecord::new`], which performs no checks of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Date of the occurrence (caller's year, dataset month and day)
    pub date: NaiveDate,

    /// Event name (e.g. "Independência do Brasil")
    pub title: String,

    /// Coverage label (e.g. "Nacional", "Estadual", "Municipal")
    pub coverage_scope: String,

    /// Two-letter country code
    pub country_code: String,

    /// Two-letter state code, empty for national holidays
    pub state_code: String,

    /// Federal administrative code, empty when not applicable
    pub federal_code: String,

    /// IBGE municipality code, empty when not applicable
    pub ibge_code: String,

    /// City name, populated only for municipal holidays
    pub city_name: String,

    /// Reserved classification flag, always `false` from the importers
    pub reserved_a: bool,

    /// Reserved classification flag, always `false` from the importers
    pub reserved_b: bool,
}

impl HolidayRecord {
    /// Create a new holiday record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        title: String,
        coverage_scope: String,
        country_code: String,
        state_code: String,
        federal_code: String,
        ibge_code: String,
        city_name: String,
        reserved_a: bool,
        reserved_b: bool,
    ) -> Self {
        Self {
            date,
            title,
            coverage_scope,
            country_code,
            state_code,
            federal_code,
            ibge_code,
            city_name,
            reserved_a,
            reserved_b,
        }
    }

    /// Location of the holiday as "City/UF", "UF" or the country code
    pub fn location(&self) -> String {
        match (self.city_name.is_empty(), self.state_code.is_empty()) {
            (false, false) => format!("{}/{}", self.city_name, self.state_code),
            (false, true) => self.city_name.clone(),
            (true, false) => self.state_code.clone(),
            (true, true) => self.country_code.clone(),
        }
    }
}

impl std::fmt::Display for HolidayRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.coverage_scope,
            self.location()
        )
    }
}
