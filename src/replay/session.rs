//! Replay session
//!
//! A `ReplaySession` owns one accumulator and feeds it the records read
//! from a script, counting how many rows were applied and how many were
//! rejected. It does no I/O, so it can be driven from any record source.
//!
//! # Error Policy
//!
//! - Recoverable errors (malformed rows, unknown operations, rejected
//!   operands) are logged and counted, and the session keeps going
//! - With `fail_fast`, the first recoverable error is returned instead
//! - Fatal errors are always returned

use crate::core::Accumulator;
use crate::replay::ReplayConfig;
use crate::types::{OperationRecord, ReplayError, ReplaySummary};
use tracing::{debug, warn};

/// Accumulator plus replay counters
#[derive(Debug)]
pub struct ReplaySession {
    accumulator: Accumulator,
    applied: usize,
    rejected: usize,
    fail_fast: bool,
}

impl ReplaySession {
    /// Create a session, writing the configured initial value if any
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::InvalidInitialValue` if the initial value does
    /// not coerce to a number.
    pub fn new(config: &ReplayConfig) -> Result<Self, ReplayError> {
        let mut accumulator = Accumulator::new();

        if let Some(initial) = &config.initial {
            accumulator
                .write(initial.as_str())
                .map_err(|source| ReplayError::InvalidInitialValue {
                    value: initial.clone(),
                    source,
                })?;
        }

        Ok(Self {
            accumulator,
            applied: 0,
            rejected: 0,
            fail_fast: config.fail_fast,
        })
    }

    /// Handle one item produced by a script reader
    ///
    /// # Arguments
    ///
    /// * `item` - A parsed record, or the error produced while reading it
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The record was applied, or the error was recoverable
    ///   and has been counted
    /// * `Err(ReplayError)` - A fatal error, or any error under fail-fast
    pub fn handle(
        &mut self,
        item: Result<OperationRecord, ReplayError>,
    ) -> Result<(), ReplayError> {
        match item.and_then(|record| self.apply(record)) {
            Ok(()) => {
                self.applied += 1;
                Ok(())
            }
            Err(error) if error.is_recoverable() && !self.fail_fast => {
                warn!(%error, "script row skipped");
                self.rejected += 1;
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Snapshot of the current value and counters
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            value: self.accumulator.value(),
            applied: self.applied,
            rejected: self.rejected,
        }
    }

    /// The session's accumulator
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    fn apply(&mut self, record: OperationRecord) -> Result<(), ReplayError> {
        let OperationRecord {
            line,
            operation,
            operands,
        } = record;

        debug!(line, %operation, "applying row");
        self.accumulator
            .apply(operation, operands)
            .map_err(|source| ReplayError::rejected(line, source))
    }
}
