//! Operands and numeric coercion
//!
//! An [`Operand`] is either a number or a piece of text that should denote
//! one. Text is converted by [`parse_number`], which accepts the usual
//! "text to number" literal forms:
//!
//! - surrounding whitespace and line terminators are ignored
//! - empty (or whitespace-only) text is `0`
//! - signed decimal literals: `42`, `-3.5`, `.5`, `5.`, `1e3`, `+2.5E-4`
//! - signed `Infinity`
//! - unsigned radix literals: `0x1F`, `0o17`, `0b101`
//!
//! Everything else is rejected, including the spellings Rust's own
//! `f64::from_str` would let through (`inf`, `nan`, `infinity`).

use super::error::ParseNumberError;

/// A value handed to an accumulator operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Already numeric; only NaN is rejected
    Number(f64),

    /// Numeric text, coerced with [`parse_number`]
    Text(String),
}

impl Operand {
    /// Coerce the operand to a well-formed number
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a numeric literal or the
    /// resulting number is NaN.
    pub fn to_number(&self) -> Result<f64, ParseNumberError> {
        let number = match self {
            Operand::Number(number) => *number,
            Operand::Text(text) => parse_number(text)?,
        };

        if number.is_nan() {
            return Err(ParseNumberError::NotANumber);
        }

        Ok(number)
    }
}

impl From<f64> for Operand {
    fn from(number: f64) -> Self {
        Operand::Number(number)
    }
}

impl From<i32> for Operand {
    fn from(number: i32) -> Self {
        Operand::Number(f64::from(number))
    }
}

impl From<u32> for Operand {
    fn from(number: u32) -> Self {
        Operand::Number(f64::from(number))
    }
}

impl From<i64> for Operand {
    fn from(number: i64) -> Self {
        // Nearest representable value, same as any other float conversion
        Operand::Number(number as f64)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

/// Parse numeric text into an `f64`
///
/// # Arguments
///
/// * `text` - The text to parse; surrounding whitespace is ignored
///
/// # Returns
///
/// * `Ok(f64)` - The parsed number (`0` for blank text)
/// * `Err(ParseNumberError::Malformed)` - The text is not a numeric literal
pub fn parse_number(text: &str) -> Result<f64, ParseNumberError> {
    let trimmed = text.trim_matches(is_str_whitespace);
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let number = match radix_literal(trimmed) {
        Some((digits, radix)) => parse_radix_digits(digits, radix),
        None => parse_decimal(trimmed),
    };

    number.ok_or_else(|| ParseNumberError::malformed(text))
}

/// Whitespace and line terminators stripped around numeric text
fn is_str_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Split `0x..`, `0o..`, `0b..` into digits and radix
fn radix_literal(text: &str) -> Option<(&str, u32)> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }

    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };

    Some((&text[2..], radix))
}

/// Parse radix digits, rounding to the nearest `f64` exactly once
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0.0);
    }

    if let Ok(exact) = u128::from_str_radix(significant, radix) {
        return Some(exact as f64);
    }

    // Radix is a power of two: keep a u128 prefix, fold the rest into a sticky bit
    let bits_per_digit = radix.trailing_zeros() as usize;
    let (head, tail) = significant.split_at(120 / bits_per_digit);
    let mut mantissa = u128::from_str_radix(head, radix).ok()?;
    if tail.bytes().any(|b| b != b'0') {
        mantissa |= 1;
    }

    Some(mantissa as f64 * pow2(tail.len() * bits_per_digit))
}

/// Exact power of two, or infinity past the `f64` range
fn pow2(exponent: usize) -> f64 {
    if exponent > 1023 {
        f64::INFINITY
    } else {
        f64::from_bits((exponent as u64 + 1023) << 52)
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let negative = text.starts_with('-');
    let unsigned = strip_sign(text);

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_unsigned_decimal_literal(unsigned) {
        return None;
    }

    // Grammar already checked; from_str only does the rounding
    text.parse::<f64>().ok()
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text)
}

/// `digits [. digits] [exp]` or `. digits [exp]`
fn is_unsigned_decimal_literal(text: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok =
        all_digits(integer) && all_digits(fraction) && !(integer.is_empty() && fraction.is_empty());

    let exponent_ok = exponent.map_or(true, |exp| {
        let digits = strip_sign(exp);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("5", 5.0)]
    #[case::negative("-5", -5.0)]
    #[case::explicit_plus("+7", 7.0)]
    #[case::fraction("2.5", 2.5)]
    #[case::leading_dot(".5", 0.5)]
    #[case::trailing_dot("5.", 5.0)]
    #[case::exponent("1e3", 1000.0)]
    #[case::signed_exponent("2.5E-1", 0.25)]
    #[case::padded("  10 \n", 10.0)]
    #[case::nbsp_and_bom("\u{FEFF}\u{00A0}42\u{3000}", 42.0)]
    #[case::empty("", 0.0)]
    #[case::blank("   \t", 0.0)]
    #[case::leading_zeros("007", 7.0)]
    #[case::hex("0x1F", 31.0)]
    #[case::hex_upper("0XfF", 255.0)]
    #[case::octal("0o17", 15.0)]
    #[case::binary("0b101", 5.0)]
    #[case::hex_above_2_53("0x200000000000011", 144115188075855904.0)]
    #[case::hex_zero_padded("0x0000", 0.0)]
    #[case::octal_wider_than_u128("0o100000000000000000000000000000000000000000000000000", f64::from_bits((150 + 1023) << 52))]
    #[case::hex_sticky_rounds_up("0x10000000000000800000000000000000000000001", f64::from_bits(((160 + 1023) << 52) | 1))]
    #[case::infinity("Infinity", f64::INFINITY)]
    #[case::negative_infinity("-Infinity", f64::NEG_INFINITY)]
    #[case::exponent_overflow("1e400", f64::INFINITY)]
    fn test_parse_number_valid(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_number(text), Ok(expected));
    }

    #[test]
    fn test_parse_number_huge_hex_overflows_to_infinity() {
        let text = format!("0x1{}", "0".repeat(300));
        assert_eq!(parse_number(&text), Ok(f64::INFINITY));
    }

    #[test]
    fn test_parse_number_keeps_negative_zero() {
        let zero = parse_number("-0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
    }

    #[rstest]
    #[case::word("texto")]
    #[case::trailing_garbage("12abc")]
    #[case::inner_space("1 2")]
    #[case::separator("1_000")]
    #[case::comma_decimal("1,5")]
    #[case::two_dots("1.2.3")]
    #[case::lone_dot(".")]
    #[case::lone_sign("-")]
    #[case::empty_exponent("1e")]
    #[case::exponent_sign_only("1e+")]
    #[case::rust_inf("inf")]
    #[case::rust_nan("NaN")]
    #[case::lowercase_infinity("infinity")]
    #[case::signed_hex("-0x10")]
    #[case::empty_hex("0x")]
    #[case::bad_binary_digit("0b102")]
    #[case::double_sign("+-1")]
    fn test_parse_number_rejects(#[case] text: &str) {
        assert_eq!(
            parse_number(text),
            Err(ParseNumberError::Malformed {
                text: text.to_string()
            })
        );
    }

    #[rstest]
    #[case::number(Operand::from(10), 10.0)]
    #[case::negative_number(Operand::from(-5), -5.0)]
    #[case::float(Operand::from(0.1), 0.1)]
    #[case::wide_int(Operand::from(1_i64 << 40), 1_099_511_627_776.0)]
    #[case::text(Operand::from("10"), 10.0)]
    #[case::owned_text(Operand::from(String::from(" -3 ")), -3.0)]
    fn test_operand_to_number(#[case] operand: Operand, #[case] expected: f64) {
        assert_eq!(operand.to_number(), Ok(expected));
    }

    #[test]
    fn test_operand_rejects_nan_number() {
        assert_eq!(
            Operand::from(f64::NAN).to_number(),
            Err(ParseNumberError::NotANumber)
        );
    }

    #[test]
    fn test_operand_rejects_non_numeric_text() {
        assert!(matches!(
            Operand::from("texto").to_number(),
            Err(ParseNumberError::Malformed { .. })
        ));
    }

    proptest! {
        #[test]
        fn property_radix_literals_match_integer_value(n in any::<u64>()) {
            let expected = n as f64;
            prop_assert_eq!(parse_number(&format!("0x{:x}", n)), Ok(expected));
            prop_assert_eq!(parse_number(&format!("0X{:X}", n)), Ok(expected));
            prop_assert_eq!(parse_number(&format!("0o{:o}", n)), Ok(expected));
            prop_assert_eq!(parse_number(&format!("0b{:b}", n)), Ok(expected));
        }

        #[test]
        fn property_wide_hex_literals_round_once(n in any::<u64>(), zeros in 0usize..200) {
            let text = format!("0x{:x}{}", n, "0".repeat(zeros));
            let expected = n as f64 * 2f64.powi(4 * zeros as i32);
            prop_assert_eq!(parse_number(&text), Ok(expected));
        }
    }
}
