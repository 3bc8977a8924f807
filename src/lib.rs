//! Rust Accumulator Library
//! # Overview
//!
//! This library provides a stateful arithmetic accumulator: a single numeric
//! value with validated write, add and subtract operations. Operands may be
//! numbers or numeric text; text is coerced before validation, and an
//! operand that does not denote a number is rejected without touching the
//! stored value.
//!
//! A script replay driver streams CSV operation rows through one
//! accumulator and reports the final value.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Operand, Operation, errors, summary)
//! - [`crate::core`] - The [`Accumulator`] itself
//! - [`io`] - Script reading and summary output
//! - [`replay`] - Drives script records through an accumulator
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Operations
//!
//! - **read**: [`Accumulator::value`]
//! - **write**: replace the value ([`Accumulator::write`])
//! - **add**: add a delta ([`Accumulator::add`])
//! - **subtract**: subtract a delta ([`Accumulator::subtract`])
//!
//! Every failure is [`AccumulatorError::InvalidArgument`] ("The argument
//! must be a valid number").

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod replay;
pub mod types;

pub use crate::core::Accumulator;
pub use io::write_summary_csv;
pub use replay::{replay, ReplayConfig};
pub use types::{
    parse_number, AccumulatorError, Operand, Operation, OperationRecord, ReplayError,
    ReplaySummary,
};
