//! Operation-related types
//!
//! Defines the accumulator operations that can be named in a script and
//! the record structure produced for each script row.

use super::operand::Operand;
use std::fmt;
use std::str::FromStr;

/// Line number of a script row (1-based, header is line 1)
pub type LineNumber = u64;

/// Mutating accumulator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Replace the current value
    Write,

    /// Add the operand to the current value
    Add,

    /// Subtract the operand from the current value
    Subtract,
}

impl Operation {
    /// Lowercase name as used in scripts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Write => "write",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Case-insensitive parse of an operation name
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "write" => Ok(Operation::Write),
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            _ => Err(name.to_string()),
        }
    }
}

/// Parsed script row
///
/// `operands` keeps every operand written on the row. Only the first one
/// is used when the record is applied; the rest are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Line the row was read from
    pub line: LineNumber,

    /// Operation to apply
    pub operation: Operation,

    /// Operands in column order
    pub operands: Vec<Operand>,
}
