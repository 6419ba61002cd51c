//! `;`-delimited row reader
//!
//! Reads a holiday dataset in a single forward pass. The first line is the
//! header and is discarded without validation; every other non-blank line
//! becomes a [`RawRow`] holding exactly the declared number of fields.

use crate::config::RowPolicy;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};
use csv::ByteRecord;
use std::io::Read;
use tracing::{debug, warn};

/// One data line of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source (the header is line 1)
    pub line: u64,

    /// Untrimmed field values, exactly `expected_columns` long
    pub fields: Vec<String>,
}

/// Rows read from a dataset plus the lines that had to be skipped
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// Header line as found in the source
    pub header: Option<String>,

    /// Data rows in source order
    pub rows: Vec<RawRow>,

    /// Messages for lines skipped as malformed
    pub skipped: Vec<String>,
}

/// Read every data row of a dataset
///
/// # Arguments
/// * `source` - Stream over the dataset; consumed and dropped before returning
/// * `dataset` - Dataset name used in diagnostics
/// * `expected_columns` - Number of declared columns for the dataset's scope
/// * `policy` - Whether a malformed line is skipped or fails the read
///
/// # Errors
/// * Returns `Error::MalformedRow` for a malformed line under `RowPolicy::Fail`
/// * Returns `Error::CsvParsing` if the underlying stream fails
pub fn read_rows<R: Read>(
    source: R,
    dataset: &str,
    expected_columns: usize,
    policy: RowPolicy,
) -> Result<ReadOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let mut outcome = ReadOutcome::default();

    let header = reader.byte_headers().map_err(|e| {
        Error::csv_parsing(dataset, "Failed to read header line".to_string(), Some(e))
    })?;
    if !header.is_empty() {
        let text = header
            .iter()
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(";");
        debug!("Dataset {} header: {}", dataset, text);
        outcome.header = Some(text);
    }

    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record).map_err(|e| {
        Error::csv_parsing(dataset, "Failed to read data line".to_string(), Some(e))
    })? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if is_blank(&record) {
            continue;
        }

        match decode_fields(&record, expected_columns) {
            Ok(fields) => outcome.rows.push(RawRow { line, fields }),
            Err(message) => {
                let error = Error::malformed_row(dataset, line, message);
                if policy == RowPolicy::Fail {
                    return Err(error);
                }
                warn!("Skipping line: {}", error);
                outcome.skipped.push(error.to_string());
            }
        }
    }

    debug!(
        "Read {} rows from {} ({} skipped)",
        outcome.rows.len(),
        dataset,
        outcome.skipped.len()
    );

    Ok(outcome)
}

fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|field| field.trim_ascii().is_empty())
}

/// Take the declared fields of a record, ignoring any extra ones
fn decode_fields(
    record: &ByteRecord,
    expected_columns: usize,
) -> std::result::Result<Vec<String>, String> {
    if record.len() < expected_columns {
        return Err(format!(
            "expected {} fields, found {}",
            expected_columns,
            record.len()
        ));
    }

    record
        .iter()
        .take(expected_columns)
        .enumerate()
        .map(|(index, bytes)| {
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| format!("field {} is not valid UTF-8", index + 1))
        })
        .collect()
}
