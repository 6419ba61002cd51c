//! Configuration management and validation.
//!
//! Provides the import configuration: coverage label and country code
//! overrides, and the policy applied to rows that cannot be used.

use crate::app::models::Scope;
use crate::constants::DEFAULT_COUNTRY_CODE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do with a row that is malformed or carries an impossible date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Log the row, record it in the import statistics and continue
    #[default]
    Skip,
    /// Abort the import with the row's error
    Fail,
}

/// Configuration for a holiday import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Coverage label written into every record (None = scope default)
    pub coverage_label: Option<String>,

    /// Two-letter country code written into every record
    pub country_code: String,

    /// Handling of malformed rows and invalid dates
    pub row_policy: RowPolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            coverage_label: None,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            row_policy: RowPolicy::Skip,
        }
    }
}

impl ImportConfig {
    /// Override the coverage label
    pub fn with_coverage_label(mut self, label: impl Into<String>) -> Self {
        self.coverage_label = Some(label.into());
        self
    }

    /// Override the country code
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Set the malformed-row policy
    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    /// Fail on the first unusable row instead of skipping it
    pub fn strict(self) -> Self {
        self.with_row_policy(RowPolicy::Fail)
    }

    /// Coverage label to use for records of `scope`
    pub fn label_for(&self, scope: Scope) -> &str {
        self.coverage_label
            .as_deref()
            .unwrap_or_else(|| scope.default_label())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.country_code.len() != 2
            || !self.country_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(Error::configuration(format!(
                "Invalid country code '{}': expected two ASCII letters",
                self.country_code
            )));
        }

        if let Some(label) = &self.coverage_label {
            if label.trim().is_empty() {
                return Err(Error::configuration(
                    "Coverage label cannot be empty".to_string(),
                ));
            }
        }

        debug!("Import configuration validated: {:?}", self);
        Ok(())
    }
}
