//! CSV format handling for operation scripts and summary output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Conversion from raw CSV rows to `OperationRecord`s
//! - Summary output serialization
//!
//! # Script Format
//!
//! ```text
//! op,operand
//! write,5
//! add,10
//! subtract, 2.5
//! add,10,5
//! ```
//!
//! The first column names the operation, every further column is an
//! operand. Rows may carry any number of operands; trailing empty fields
//! are dropped, so `add,` has no operand at all.
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{LineNumber, Operand, Operation, OperationRecord, ReplayError, ReplaySummary};
use csv::StringRecord;
use std::io::Write;

/// Convert a raw CSV row to an OperationRecord
///
/// # Arguments
///
/// * `row` - The CSV row, already trimmed by the reader
/// * `line` - Line number of the row, used for error reporting
///
/// # Returns
///
/// * `Ok(OperationRecord)` - The parsed record; operands are kept as text
/// * `Err(ReplayError::UnknownOperation)` - The first column is not an operation
pub fn convert_script_record(
    row: &StringRecord,
    line: LineNumber,
) -> Result<OperationRecord, ReplayError> {
    let name = row.get(0).unwrap_or_default();
    let operation = name
        .parse::<Operation>()
        .map_err(|op: String| ReplayError::unknown_operation(&op, line))?;

    let mut fields: Vec<&str> = row.iter().skip(1).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    Ok(OperationRecord {
        line,
        operation,
        operands: fields.into_iter().map(Operand::from).collect(),
    })
}

/// Write the replay summary as CSV
///
/// The header (`value,applied,rejected`) is derived from the summary's
/// field names.
///
/// # Arguments
///
/// * `summary` - The summary to write
/// * `output` - Destination writer (stdout in the CLI)
///
/// # Errors
///
/// Returns `ReplayError::IoError` if the output cannot be written.
pub fn write_summary_csv(
    summary: &ReplaySummary,
    output: &mut dyn Write,
) -> Result<(), ReplayError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.serialize(summary).map_err(|e| ReplayError::IoError {
        message: format!("Failed to write summary: {}", e),
    })?;
    writer.flush()?;

    Ok(())
}
