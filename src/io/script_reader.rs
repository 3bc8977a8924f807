//! Streaming CSV reader for operation scripts
//!
//! Provides an iterator over `OperationRecord`s read from a script file.
//! Delegates row conversion to the script_format module.
//!
//! ```no_run
//! use rust_accumulator::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("ops.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{} {:?}", record.operation, record.operands),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Malformed rows and unknown operations are yielded as `Err` items,
//!   carrying the row's line number, and iteration continues
//!
//! Rows are read one at a time, so memory use does not grow with the
//! script length.

use crate::io::script_format::convert_script_record;
use crate::types::{OperationRecord, ReplayError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over a script file
#[derive(Debug)]
pub struct ScriptReader {
    reader: csv::Reader<File>,
    row: StringRecord,
    failed: bool,
}

impl ScriptReader {
    /// Open a script file
    ///
    /// The CSV reader is configured to:
    /// - Treat the first row as a header
    /// - Trim whitespace from all fields
    /// - Allow any number of fields per row
    ///
    /// # Errors
    ///
    /// * `ReplayError::FileNotFound` - Nothing exists at `path`
    /// * `ReplayError::IoError` - The file exists but cannot be opened
    pub fn new(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReplayError::file_not_found(&path.display().to_string()),
            _ => ReplayError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            row: StringRecord::new(),
            failed: false,
        })
    }
}

impl Iterator for ScriptReader {
    type Item = Result<OperationRecord, ReplayError>;

    /// Read and convert the next row
    ///
    /// # Returns
    ///
    /// * `Some(Ok(OperationRecord))` - Successfully parsed row
    /// * `Some(Err(ReplayError))` - Malformed row, unknown operation, or
    ///   an I/O failure (after which iteration ends)
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                let line = self.row.position().map_or(0, |pos| pos.line());
                Some(convert_script_record(&self.row, line))
            }
            Ok(false) => None,
            Err(e) => {
                let error = ReplayError::from(e);
                // An I/O failure would repeat forever; report it once
                self.failed = !error.is_recoverable();
                Some(Err(error))
            }
        }
    }
}
