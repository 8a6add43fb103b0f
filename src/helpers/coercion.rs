//! Conversions between loosely typed wire values and strict in-memory types.
//!
//! The Authlete API is lenient about JSON types: booleans may arrive as
//! `"true"`, integers as strings, and absent values as `null`. These
//! functions define how such values are read.

use serde_json::Value;

/// Renders a wire value as a plain string.
///
/// `null` stays absent, booleans become `"true"` / `"false"`, strings are
/// returned as is and numbers keep their decimal digits. Arrays and objects
/// are rendered as JSON text.
pub fn to_display_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Reads a wire value as a boolean.
///
/// `null` is `false` and every string other than a case-insensitive
/// `"true"` is `false` as well. Returns `None` for numbers, arrays and
/// objects.
pub fn parse_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Null => Some(false),
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(s.eq_ignore_ascii_case("true")),
        _ => None,
    }
}

/// Reads a wire value as an integer.
///
/// `null` is `0`. Strings must hold a decimal integer. Returns `None` for
/// anything that cannot be read as an `i64`.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Null => Some(0),
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

/// Whether `s` is an optionally signed run of ASCII digits
pub fn is_integer_string(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "../tests/coercion_tests.rs"]
mod coercion_tests;
