use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Result type returned by every fallible operation of this crate
pub type AuthleteResult<T> = Result<T, AuthleteError>;

/// # AuthleteError
/// Error that will be returned to the end user of this library
#[derive(Debug, Error)]
pub enum AuthleteError {
    /// A value was rejected by one of the validation utilities. Raised when a
    /// wire value has the wrong shape for the field it is assigned to, or when
    /// an argument violates a constraint (e.g. a negative pagination offset).
    #[error("invalid '{field}': {message}")]
    Validation {
        /// Name of the field or argument
        field: String,
        /// What was expected of it
        message: String,
    },
    /// The decoder met a value whose JSON type cannot be decoded into the
    /// structural shape of the target field (e.g. a boolean where a nested
    /// object is expected).
    #[error("type error on '{field}': expected {expected}, found {found}")]
    Type {
        /// Name of the field
        field: String,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type
        found: &'static str,
    },
    /// A wire string did not match any canonical name of a closed enum set.
    #[error("'{value}' is not a valid {enum_name}")]
    EnumParse {
        /// Name of the enum type
        enum_name: &'static str,
        /// The unrecognized value
        value: String,
    },
    /// Malformed JSON, or JSON whose top level is not an object.
    #[error("parse error: {0}")]
    Parse(String),
    /// The API client is missing something it needs to issue a call.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The Authlete API could not be reached or answered with a non-2xx status.
    #[error(transparent)]
    Api(Box<ApiError>),
}

impl AuthleteError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn type_error(field: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::Type {
            field: field.into(),
            expected,
            found: json_type_name(found),
        }
    }

    /// Returns true for errors raised by the validation utilities
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for decode type errors
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// Returns the [ApiError] if this error came from the transport
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for AuthleteError {
    fn from(value: ApiError) -> Self {
        Self::Api(Box::new(value))
    }
}

/// # ApiError
/// A failed call to the Authlete API. Covers both non-2xx answers and
/// failures to get an answer at all, in which case `status_code` is `0`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Short description
    pub message: String,
    /// HTTP status code, `0` when no response was received
    pub status_code: u16,
    /// Response headers
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body
    pub body: Option<String>,
    /// `resultMessage` of the response body, when the body is a JSON object that carries one
    pub result_message: Option<String>,
}

impl ApiError {
    pub(crate) fn from_response(
        status_code: u16,
        headers: HashMap<String, Vec<String>>,
        body: Option<String>,
    ) -> Self {
        let result_message = body
            .as_deref()
            .and_then(|b| serde_json::from_str::<Value>(b).ok())
            .and_then(|v| {
                v.get("resultMessage")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });

        let message = match &result_message {
            Some(rm) => format!("Authlete API returned {status_code}: {rm}"),
            None => format!("Authlete API returned {status_code}"),
        };

        Self {
            message,
            status_code,
            headers,
            body,
            result_message,
        }
    }

    pub(crate) fn from_transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 0,
            headers: HashMap::new(),
            body: None,
            result_message: None,
        }
    }
}

/// Name of the JSON type of `value`, as used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
