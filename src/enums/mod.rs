//! # Enumerated values
//!
//! Every closed set of names the Authlete API exchanges (grant types, JOSE
//! algorithms, the `action` of each endpoint response, ...) is a plain Rust
//! enum implementing [AuthleteEnum]. The sets are generated by one macro so
//! that name lookup, serialization and error reporting behave the same for
//! all of them.

use std::fmt::Debug;

use serde_json::Value;

use crate::types::{AuthleteError, AuthleteResult};

macro_rules! authlete_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::enums::AuthleteEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const NAMES: &'static [&'static str] = &[$($wire,)+];

            fn values() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::AuthleteEnum::name(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::AuthleteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enums::AuthleteEnum>::value_of(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::AuthleteEnum::name(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::enums::AuthleteEnum>::value_of(&name)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

mod action;
mod jose;
mod oauth;

pub use action::*;
pub use jose::{JweAlg, JweEnc, JwsAlg};
pub use oauth::*;

/// A closed set of named values.
///
/// Instances are never built dynamically: lookup by name either yields one
/// of [AuthleteEnum::values] or fails.
pub trait AuthleteEnum: Copy + Eq + Debug + 'static {
    /// Name of the enum type, used in error messages
    const TYPE_NAME: &'static str;
    /// Canonical names, in declaration order
    const NAMES: &'static [&'static str];

    /// Every member of the set, in declaration order
    fn values() -> &'static [Self];

    /// Canonical name of this member. Round-trips through [AuthleteEnum::value_of].
    fn name(self) -> &'static str;

    /// Exact, case-sensitive lookup
    fn from_name(name: &str) -> Option<Self> {
        Self::values().iter().copied().find(|v| v.name() == name)
    }

    /// Like [AuthleteEnum::from_name], failing with [AuthleteError::EnumParse]
    fn value_of(name: &str) -> AuthleteResult<Self> {
        Self::from_name(name).ok_or_else(|| AuthleteError::EnumParse {
            enum_name: Self::TYPE_NAME,
            value: name.to_string(),
        })
    }

    /// Reads a wire value. `null` yields `None`, strings are looked up with
    /// [AuthleteEnum::value_of] and every other JSON type is a type error.
    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Self::value_of(s).map(Some),
            other => Err(AuthleteError::type_error(field, "string", other)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/enum_tests.rs"]
mod enum_tests;
