//! Accumulator module
//!
//! This module provides the `Accumulator` struct, which holds a single
//! numeric value and applies validated mutations to it.
//!
//! The Accumulator is responsible for:
//! - Coercing operands (numbers or numeric text) before any mutation
//! - Rejecting operands that do not denote a well-formed number
//! - Keeping the value unchanged whenever an operation fails
//!
//! Every operand goes through [`Operand::to_number`] first, so the value can
//! never become NaN. Arithmetic itself follows plain `f64` semantics.

use crate::types::{AccumulatorError, Operand, Operation};
use tracing::{debug, trace};

/// Holds one numeric value and applies validated mutations
///
/// The value is private: it can only be read through [`Accumulator::value`]
/// and changed through [`Accumulator::write`], [`Accumulator::add`],
/// [`Accumulator::subtract`] or [`Accumulator::apply`].
///
/// # Examples
///
/// ```
/// use rust_accumulator::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.add(10).unwrap();
/// acc.subtract("2.5").unwrap();
/// assert_eq!(acc.value(), 7.5);
///
/// assert!(acc.add("texto").is_err());
/// assert_eq!(acc.value(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    value: f64,
}

impl Accumulator {
    /// Create a new Accumulator holding zero
    pub fn new() -> Self {
        Accumulator { value: 0.0 }
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the current value
    ///
    /// # Arguments
    ///
    /// * `input` - A number or numeric text
    ///
    /// # Errors
    ///
    /// Returns `AccumulatorError::InvalidArgument` if `input` does not
    /// coerce to a well-formed number. The value is left unchanged.
    pub fn write(&mut self, input: impl Into<Operand>) -> Result<(), AccumulatorError> {
        let number = coerce(input.into(), Operation::Write)?;
        self.commit(Operation::Write, number)
    }

    /// Add a delta to the current value
    ///
    /// Negative deltas decrease the value.
    ///
    /// # Arguments
    ///
    /// * `delta` - A number or numeric text
    ///
    /// # Errors
    ///
    /// Returns `AccumulatorError::InvalidArgument` if `delta` does not
    /// coerce to a well-formed number, or if the sum would be NaN
    /// (`Infinity + -Infinity`). The value is left unchanged.
    pub fn add(&mut self, delta: impl Into<Operand>) -> Result<(), AccumulatorError> {
        let delta = coerce(delta.into(), Operation::Add)?;
        self.commit(Operation::Add, self.value + delta)
    }

    /// Subtract a delta from the current value
    ///
    /// Negative deltas increase the value.
    ///
    /// # Arguments
    ///
    /// * `delta` - A number or numeric text
    ///
    /// # Errors
    ///
    /// Returns `AccumulatorError::InvalidArgument` if `delta` does not
    /// coerce to a well-formed number, or if the difference would be NaN.
    /// The value is left unchanged.
    pub fn subtract(&mut self, delta: impl Into<Operand>) -> Result<(), AccumulatorError> {
        let delta = coerce(delta.into(), Operation::Subtract)?;
        self.commit(Operation::Subtract, self.value - delta)
    }

    /// Apply an operation to a list of operands
    ///
    /// Only the first operand is used. Any further operands are accepted
    /// and ignored, so `apply(Operation::Add, [10, 5])` behaves exactly
    /// like `add(10)`.
    ///
    /// # Errors
    ///
    /// Returns `AccumulatorError::InvalidArgument` if there is no operand
    /// at all, or under the same conditions as the operation itself.
    pub fn apply<I>(&mut self, operation: Operation, operands: I) -> Result<(), AccumulatorError>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            debug!(%operation, "missing operand");
            return Err(AccumulatorError::InvalidArgument);
        };

        let ignored = operands.count();
        if ignored > 0 {
            trace!(%operation, ignored, "extra operands ignored");
        }

        match operation {
            Operation::Write => self.write(first),
            Operation::Add => self.add(first),
            Operation::Subtract => self.subtract(first),
        }
    }

    fn commit(&mut self, operation: Operation, next: f64) -> Result<(), AccumulatorError> {
        if next.is_nan() {
            debug!(%operation, current = self.value, "result is not a number");
            return Err(AccumulatorError::InvalidArgument);
        }

        debug!(%operation, previous = self.value, value = next, "value updated");
        self.value = next;

        Ok(())
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

fn coerce(operand: Operand, operation: Operation) -> Result<f64, AccumulatorError> {
    operand.to_number().map_err(|e| {
        debug!(%operation, reason = %e, "operand rejected");
        AccumulatorError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::format_number;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_new_starts_at_zero() {
        let acc = Accumulator::new();
        assert_eq!(acc.value(), 0.0);
        assert_eq!(Accumulator::default(), acc);
    }

    #[test]
    fn test_value_is_idempotent() {
        let mut acc = Accumulator::new();
        acc.write(3.25).unwrap();

        let first = acc.value();
        let second = acc.value();
        assert_eq!(first, second);
        assert_eq!(first, 3.25);
    }

    #[test]
    fn test_write_numeric_text() {
        let mut acc = Accumulator::new();

        assert!(acc.write("5").is_ok());
        assert_eq!(acc.value(), 5.0);
    }

    #[rstest]
    #[case::word("texto")]
    #[case::trailing_garbage("5px")]
    #[case::nan_text("NaN")]
    fn test_write_invalid_text_preserves_value(#[case] input: &str) {
        let mut acc = Accumulator::new();
        acc.write(8).unwrap();

        let result = acc.write(input);

        assert_eq!(result, Err(AccumulatorError::InvalidArgument));
        assert_eq!(
            result.unwrap_err().to_string(),
            "The argument must be a valid number"
        );
        assert_eq!(acc.value(), 8.0);
    }

    #[test]
    fn test_write_rejects_nan_number() {
        let mut acc = Accumulator::new();

        assert_eq!(acc.write(f64::NAN), Err(AccumulatorError::InvalidArgument));
        assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn test_write_blank_text_is_zero() {
        let mut acc = Accumulator::new();
        acc.write(4).unwrap();

        acc.write("  ").unwrap();
        assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut acc = Accumulator::new();

        acc.add(10).unwrap();
        assert_eq!(acc.value(), 10.0);

        acc.add(5).unwrap();
        assert_eq!(acc.value(), 15.0);

        acc.add("10").unwrap();
        assert_eq!(acc.value(), 25.0);

        assert_eq!(acc.add("texto"), Err(AccumulatorError::InvalidArgument));
        assert_eq!(acc.value(), 25.0);

        acc.add(-5).unwrap();
        assert_eq!(acc.value(), 20.0);
    }

    #[test]
    fn test_subtract_accumulates() {
        let mut acc = Accumulator::new();

        acc.subtract(10).unwrap();
        assert_eq!(acc.value(), -10.0);

        acc.subtract(5).unwrap();
        assert_eq!(acc.value(), -15.0);

        acc.subtract("10").unwrap();
        assert_eq!(acc.value(), -25.0);

        assert_eq!(
            acc.subtract("texto"),
            Err(AccumulatorError::InvalidArgument)
        );
        assert_eq!(acc.value(), -25.0);

        acc.subtract(-5).unwrap();
        assert_eq!(acc.value(), -20.0);
    }

    #[rstest]
    #[case::add(Operation::Add, 10.0)]
    #[case::subtract(Operation::Subtract, -10.0)]
    #[case::write(Operation::Write, 10.0)]
    fn test_apply_ignores_extra_operands(#[case] operation: Operation, #[case] expected: f64) {
        let mut acc = Accumulator::new();

        assert!(acc.apply(operation, [10, 5]).is_ok());
        assert_eq!(acc.value(), expected);
    }

    #[test]
    fn test_apply_ignores_invalid_extra_operands() {
        let mut acc = Accumulator::new();

        assert!(acc.apply(Operation::Add, ["10", "texto"]).is_ok());
        assert_eq!(acc.value(), 10.0);
    }

    #[rstest]
    #[case::write(Operation::Write)]
    #[case::add(Operation::Add)]
    #[case::subtract(Operation::Subtract)]
    fn test_apply_without_operand_fails(#[case] operation: Operation) {
        let mut acc = Accumulator::new();
        acc.write(2).unwrap();

        let result = acc.apply(operation, Vec::<Operand>::new());

        assert_eq!(result, Err(AccumulatorError::InvalidArgument));
        assert_eq!(acc.value(), 2.0);
    }

    #[rstest]
    #[case::add_opposite_infinity(f64::INFINITY, Operation::Add, f64::NEG_INFINITY)]
    #[case::subtract_same_infinity(f64::INFINITY, Operation::Subtract, f64::INFINITY)]
    fn test_nan_result_is_rejected(
        #[case] start: f64,
        #[case] operation: Operation,
        #[case] delta: f64,
    ) {
        let mut acc = Accumulator::new();
        acc.write(start).unwrap();

        assert_eq!(
            acc.apply(operation, [delta]),
            Err(AccumulatorError::InvalidArgument)
        );
        assert_eq!(acc.value(), start);
    }

    #[test]
    fn test_infinity_is_a_valid_value() {
        let mut acc = Accumulator::new();

        acc.write("Infinity").unwrap();
        acc.add(1).unwrap();
        assert_eq!(acc.value(), f64::INFINITY);
    }

    #[test]
    fn test_floating_point_semantics() {
        let mut acc = Accumulator::new();

        acc.add(0.1).unwrap();
        acc.add("0.2").unwrap();
        assert_eq!(acc.value(), 0.1 + 0.2);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.5)]
    #[case(-123.456)]
    #[case(1e-300)]
    #[case(f64::EPSILON)]
    #[case(f64::MIN_POSITIVE)]
    #[case(f64::MAX)]
    #[case(f64::MIN)]
    fn test_write_then_read_round_trips(#[case] number: f64) {
        let mut acc = Accumulator::new();

        acc.write(number).unwrap();
        assert_eq!(acc.value(), number);

        acc.write(number.to_string()).unwrap();
        assert_eq!(acc.value(), number);
    }

    proptest! {
        #[test]
        fn property_write_then_read_round_trips(
            number in any::<f64>().prop_filter("finite", |n| n.is_finite())
        ) {
            let mut acc = Accumulator::new();

            prop_assert!(acc.write(number).is_ok());
            prop_assert_eq!(acc.value().to_bits(), number.to_bits());

            prop_assert!(acc.write(format_number(number)).is_ok());
            prop_assert_eq!(acc.value().to_bits(), number.to_bits());
        }
    }
}
