//! Shared reading and writing of the quoted, comma-separated record tables
//!
//! Every table starts with a single header line. Data rows carry one quoted
//! text column followed by bare numeric columns.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::error::LedgerError;
use crate::models::Money;

use super::file_io::read_bytes;

/// Why a persisted row was dropped during a load
///
/// Row errors never reach the ledger's callers; they only shrink the
/// loaded table and bump the skip counter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing {0} column")]
    MissingField(&'static str),

    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} is negative")]
    Negative(&'static str),

    #[error("unreadable row: {0}")]
    Malformed(String),
}

/// Rows successfully read from a table plus the number dropped along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub skipped: usize,
}

/// Read every data row of a table, dropping rows `parse` rejects
///
/// A missing file reads as an empty table.
pub fn read_rows<T, F>(path: &Path, parse: F) -> Result<Loaded<Vec<T>>, LedgerError>
where
    F: Fn(&StringRecord) -> Result<T, RowError>,
{
    let Some(contents) = read_bytes(path)? else {
        return Ok(Loaded {
            value: Vec::new(),
            skipped: 0,
        });
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_slice());

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (i, result) in reader.records().enumerate() {
        let parsed = result
            .map_err(|e| RowError::Malformed(e.to_string()))
            .and_then(|record| parse(&record));

        match parsed {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                tracing::warn!(
                    file = %path.display(),
                    row = i + 1,
                    reason = %e,
                    "Skipping unreadable row"
                );
            }
        }
    }

    Ok(Loaded {
        value: rows,
        skipped,
    })
}

/// Fetch a column, trimmed, or report it missing
pub fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'r str, RowError> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(RowError::MissingField(name))
}

/// Fetch a text column verbatim (quotes already removed by the reader)
pub fn text_field(record: &StringRecord, index: usize, name: &'static str) -> Result<String, RowError> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or(RowError::MissingField(name))
}

/// Parse a non-negative two-decimal amount column
pub fn money_field(record: &StringRecord, index: usize, name: &'static str) -> Result<Money, RowError> {
    let raw = field(record, index, name)?;
    let amount = Money::parse(raw).map_err(|_| RowError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })?;

    if amount.is_negative() {
        return Err(RowError::Negative(name));
    }
    Ok(amount)
}

/// Parse a non-negative integer column
pub fn count_field(record: &StringRecord, index: usize, name: &'static str) -> Result<u32, RowError> {
    let raw = field(record, index, name)?;
    if raw.starts_with('-') {
        return Err(RowError::Negative(name));
    }
    raw.parse().map_err(|_| RowError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

/// Wrap text in double quotes, doubling any embedded quote
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
