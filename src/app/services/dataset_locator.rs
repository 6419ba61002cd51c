//! Dataset location for the holiday importers
//!
//! Resolves a coverage scope to a readable stream over its `;`-delimited
//! dataset. The default locator serves the datasets compiled into the
//! crate; [`DirectoryDatasets`] reads same-named files from a directory.

use crate::app::models::Scope;
use crate::constants::{ASSETS_DIR_NAME, datasets};
use crate::{Error, Result};
use std::fs::File;
use std::io::{Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Datasets compiled into the crate, keyed by file name
static EMBEDDED: &[(&str, &str)] = &[
    (
        datasets::NATIONAL,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/FeriadosNacionaisBr.csv")),
    ),
    (
        datasets::STATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/FeriadosEstaduaisBr.csv")),
    ),
    (
        datasets::MUNICIPAL,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/FeriadosMunicipaisBr.csv")),
    ),
];

/// Source of holiday datasets
///
/// Each call to [`open`](DatasetLocator::open) returns an independent stream;
/// implementations must not share reader state between calls.
pub trait DatasetLocator {
    /// Open the dataset for `scope`
    ///
    /// # Errors
    /// * Returns `Error::DatasetNotFound` if the dataset is absent
    /// * Returns `Error::Io` for any other access failure
    fn open(&self, scope: Scope) -> Result<Box<dyn Read + '_>>;

    /// Human-readable location of the dataset for `scope`, used in logs
    fn describe(&self, scope: Scope) -> String;
}

/// Datasets bundled with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDatasets;

impl EmbeddedDatasets {
    pub fn new() -> Self {
        Self
    }

    /// Names of all embedded resources
    pub fn resource_names() -> Vec<&'static str> {
        EMBEDDED.iter().map(|(name, _)| *name).collect()
    }

    /// Raw text of an embedded resource
    pub fn contents(name: &str) -> Option<&'static str> {
        EMBEDDED
            .iter()
            .find(|(resource, _)| *resource == name)
            .map(|(_, text)| *text)
    }
}

impl DatasetLocator for EmbeddedDatasets {
    fn open(&self, scope: Scope) -> Result<Box<dyn Read + '_>> {
        let name = scope.dataset_name();
        trace!("Embedded resources: {:?}", Self::resource_names());

        let text = Self::contents(name)
            .ok_or_else(|| Error::dataset_not_found(scope.as_str(), self.describe(scope)))?;

        debug!("Opening embedded dataset {} ({} bytes)", name, text.len());
        Ok(Box::new(Cursor::new(text.as_bytes())))
    }

    fn describe(&self, scope: Scope) -> String {
        format!("embedded:{}/{}", ASSETS_DIR_NAME, scope.dataset_name())
    }
}

/// Datasets read from files in a directory, using the embedded file names
#[derive(Debug, Clone)]
pub struct DirectoryDatasets {
    root: PathBuf,
}

impl DirectoryDatasets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the dataset file for `scope`
    pub fn dataset_path(&self, scope: Scope) -> PathBuf {
        self.root.join(scope.dataset_name())
    }
}

impl DatasetLocator for DirectoryDatasets {
    fn open(&self, scope: Scope) -> Result<Box<dyn Read + '_>> {
        let path = self.dataset_path(scope);
        debug!("Opening dataset file: {}", path.display());

        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::dataset_not_found(
                scope.as_str(),
                path.display().to_string(),
            )),
            Err(e) => Err(Error::io(
                format!("Failed to open dataset {}", path.display()),
                e,
            )),
        }
    }

    fn describe(&self, scope: Scope) -> String {
        self.dataset_path(scope).display().to_string()
    }
}
