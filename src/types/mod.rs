//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `operand`: Operands and numeric coercion
//! - `operation`: Operation names and parsed script records
//! - `summary`: Replay summary and number formatting
//! - `error`: Error types for the accumulator and script replay

pub mod error;
pub mod operand;
pub mod operation;
pub mod summary;

pub use error::{AccumulatorError, ParseNumberError, ReplayError};
pub use operand::{parse_number, Operand};
pub use operation::{LineNumber, Operation, OperationRecord};
pub use summary::{format_number, ReplaySummary};
