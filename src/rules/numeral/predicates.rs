use crate::{Token, Value};

use super::helpers::digit_count;

/// Returns true when the token is a fraction word or literal (`0 < |v| < 1`).
pub fn is_fraction(t: &Token) -> bool {
    matches!(t.value, Value::Number(v) if v != 0.0 && v.abs() < 1.0)
}

/// Returns true when `incoming` is written with more integer digits than `current`.
pub fn has_more_digits(current: f64, incoming: f64) -> bool {
    digit_count(current) < digit_count(incoming)
}

/// Returns true when the character before `start` is a letter or digit, so a
/// sign at `start` reads as a hyphen ("twenty-2") rather than a sign.
pub fn sign_is_glued(input: &str, start: usize) -> bool {
    input.get(..start).and_then(|before| before.chars().next_back()).is_some_and(char::is_alphanumeric)
}
