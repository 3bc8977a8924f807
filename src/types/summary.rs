//! Replay result type

use serde::{Serialize, Serializer};

/// Outcome of replaying a script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// Final accumulator value
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,

    /// Rows that changed the accumulator
    pub applied: usize,

    /// Rows skipped because they could not be parsed or were rejected
    pub rejected: usize,
}

/// Render a number the way it would be written in a script
///
/// Finite values use the shortest round-trip form. Infinities are spelled
/// `Infinity` / `-Infinity` so the output can be fed back as an operand.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_number(*value))
}
