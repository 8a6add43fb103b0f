//! # Helpers
//! Value coercion and validation utilities shared by the DTO catalog and the API client

pub mod coercion;
pub mod validation;

pub use coercion::{parse_boolean, parse_integer, to_display_string};
