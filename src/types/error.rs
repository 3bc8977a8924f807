//! Error types for the accumulator and the script replay driver
//!
//! # Error Categories
//!
//! - **Accumulator errors**: an operand that cannot be coerced to a number
//! - **Coercion errors**: the detailed reason a piece of text is not numeric
//! - **Replay errors**: file access, CSV parsing, unknown operations and
//!   rejected operations while replaying a script

use thiserror::Error;

/// Error returned by accumulator operations
///
/// The accumulator has exactly one failure mode. Whenever this error is
/// returned, the accumulator's value is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccumulatorError {
    /// The operand could not be coerced to a well-formed number
    #[error("The argument must be a valid number")]
    InvalidArgument,
}

/// Reason a piece of text failed numeric coercion
///
/// Only used for diagnostics: at the accumulator boundary every variant
/// collapses into [`AccumulatorError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The text does not follow the numeric literal grammar
    #[error("'{text}' is not a numeric literal")]
    Malformed {
        /// The offending text, before trimming
        text: String,
    },

    /// The number itself is NaN
    #[error("NaN is not a valid number")]
    NotANumber,
}

impl ParseNumberError {
    /// Create a Malformed error
    pub fn malformed(text: &str) -> Self {
        ParseNumberError::Malformed {
            text: text.to_string(),
        }
    }
}

impl From<ParseNumberError> for AccumulatorError {
    fn from(_: ParseNumberError) -> Self {
        AccumulatorError::InvalidArgument
    }
}

/// Error type for replaying an operation script
///
/// `FileNotFound`, `IoError` and `InvalidInitialValue` are always fatal.
/// The remaining variants are recoverable: the offending row is skipped
/// unless fail-fast is set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Operation name not recognised
    #[error("Unknown operation '{op}' at line {line}")]
    UnknownOperation {
        /// The operation name as written in the script
        op: String,
        /// Line number of the row
        line: u64,
    },

    /// The accumulator rejected the row's operand
    #[error("Line {line}: {source}")]
    Rejected {
        /// Line number of the row
        line: u64,
        /// The accumulator error
        #[source]
        source: AccumulatorError,
    },

    /// The configured starting value is not a number
    #[error("Invalid initial value '{value}': {source}")]
    InvalidInitialValue {
        /// The value as given
        value: String,
        /// The accumulator error
        #[source]
        source: AccumulatorError,
    },
}

impl From<std::io::Error> for ReplayError {
    fn from(error: std::io::Error) -> Self {
        ReplayError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReplayError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return ReplayError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        ReplayError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl ReplayError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ReplayError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(op: &str, line: u64) -> Self {
        ReplayError::UnknownOperation {
            op: op.to_string(),
            line,
        }
    }

    /// Create a Rejected error
    pub fn rejected(line: u64, source: AccumulatorError) -> Self {
        ReplayError::Rejected { line, source }
    }

    /// Whether replay can continue past this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ReplayError::FileNotFound { .. }
                | ReplayError::IoError { .. }
                | ReplayError::InvalidInitialValue { .. }
        )
    }
}
