//! Guards that reject malformed values early.
//!
//! Each function checks one `(name, value)` pair against one constraint and
//! fails with [AuthleteError::Validation] naming the argument.

use serde_json::Value;

use crate::types::{json_type_name, AuthleteError, AuthleteResult};

fn fail(name: &str, expected: &str, value: &Value) -> AuthleteError {
    AuthleteError::validation(
        name,
        format!("must be {expected}, got {}", json_type_name(value)),
    )
}

/// `value` must be a boolean
pub fn ensure_boolean(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Bool(_) => Ok(()),
        _ => Err(fail(name, "a boolean", value)),
    }
}

/// `value` must be null or a boolean
pub fn ensure_null_or_boolean(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null | Value::Bool(_) => Ok(()),
        _ => Err(fail(name, "null or a boolean", value)),
    }
}

/// `value` must be an integral number
pub fn ensure_integer(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Number(n) if is_integral(n) => Ok(()),
        _ => Err(fail(name, "an integer", value)),
    }
}

/// `value` must be a string
pub fn ensure_string(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::String(_) => Ok(()),
        _ => Err(fail(name, "a string", value)),
    }
}

/// `value` must be a string or an integral number
pub fn ensure_string_or_integer(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::String(_) => Ok(()),
        Value::Number(n) if is_integral(n) => Ok(()),
        _ => Err(fail(name, "a string or an integer", value)),
    }
}

/// `value` must be null or a string
pub fn ensure_null_or_string(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null | Value::String(_) => Ok(()),
        _ => Err(fail(name, "null or a string", value)),
    }
}

/// `value` must be null, a string or an integral number
pub fn ensure_null_or_integer_or_string(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null | Value::String(_) => Ok(()),
        Value::Number(n) if is_integral(n) => Ok(()),
        _ => Err(fail(name, "null, an integer or a string", value)),
    }
}

/// `value` must be null or an object
pub fn ensure_null_or_object(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null | Value::Object(_) => Ok(()),
        _ => Err(fail(name, "null or an object", value)),
    }
}

/// `value` must be null or an array whose elements are all strings
pub fn ensure_null_or_array_of_string(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => match items.iter().position(|i| !i.is_string()) {
            None => Ok(()),
            Some(index) => Err(AuthleteError::validation(
                name,
                format!(
                    "must be an array of strings, element {index} is {}",
                    json_type_name(&items[index])
                ),
            )),
        },
        _ => Err(fail(name, "null or an array of strings", value)),
    }
}

/// `value` must be null or an array whose elements are all objects
pub fn ensure_null_or_array_of_object(name: &str, value: &Value) -> AuthleteResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => match items.iter().position(|i| !i.is_object()) {
            None => Ok(()),
            Some(index) => Err(AuthleteError::validation(
                name,
                format!(
                    "must be an array of objects, element {index} is {}",
                    json_type_name(&items[index])
                ),
            )),
        },
        _ => Err(fail(name, "null or an array of objects", value)),
    }
}

/// `value` must not be negative
pub fn ensure_not_negative(name: &str, value: i64) -> AuthleteResult<()> {
    if value < 0 {
        return Err(AuthleteError::validation(
            name,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}

fn is_integral(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || !n.is_f64()
}

#[cfg(test)]
#[path = "../tests/validation_tests.rs"]
mod validation_tests;
