//! # Web helpers
//! HTTP Basic authentication credentials (RFC 7617)

use base64::{engine::general_purpose, Engine};

/// A user ID / password pair carried by an `Authorization: Basic` header.
///
/// The Authlete API authenticates its callers this way with an API key and
/// an API secret, and authorization servers receive client credentials the
/// same way at their token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    user_id: String,
    password: String,
}

impl BasicCredentials {
    /// Creates credentials from a user ID and a password
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// # Parse
    /// Parses the value of an `Authorization` header.
    ///
    /// Returns `None` when the scheme is not `Basic` (matched case-insensitively)
    /// or the credentials are not valid base64 UTF-8. A missing `:` yields an
    /// empty password; the password itself may contain `:`.
    ///
    /// - `header` : The header value, e.g. `Basic dXNlcjpwYXNz`
    pub fn parse(header: &str) -> Option<Self> {
        let header = header.trim();
        let (scheme, encoded) = header.split_once(char::is_whitespace)?;

        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;

        Some(match decoded.split_once(':') {
            Some((user_id, password)) => Self::new(user_id, password),
            None => Self::new(decoded, ""),
        })
    }

    /// Formats the credentials as an `Authorization` header value
    pub fn format(&self) -> String {
        let encoded =
            general_purpose::STANDARD.encode(format!("{}:{}", self.user_id, self.password));
        format!("Basic {encoded}")
    }

    /// The user ID
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The password
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
#[path = "./tests/web_tests.rs"]
mod web_tests;
