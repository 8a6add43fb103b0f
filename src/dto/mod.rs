//! # Data Transfer Objects
//!
//! Every request and response body of the Authlete API is a DTO: a record
//! with a fixed set of fields, each stored as a strict Rust type and read
//! from the wire with a lenient, per-field [Coercion] rule.
//!
//! A DTO is declared once with the `dto!` macro, which produces the struct,
//! its getters and setters, and the static [FieldDescriptor] table the
//! [Dto] trait walks to convert it to and from JSON. Conversions from the
//! wire and direct construction share the same typed assignment, so there
//! is a single validation path per field.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::{json_type_name, AuthleteError, AuthleteResult};

macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident, $setter:ident: $kind:ty => $wire:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $($field: <$kind as $crate::dto::Coercion>::Value,)*
        }

        impl $name {
            /// Creates an instance with every field unset
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> <$kind as $crate::dto::Coercion>::Ref<'_> {
                    <$kind as $crate::dto::Coercion>::borrow(&self.$field)
                }

                #[doc = concat!("Sets `", $wire, "`.")]
                pub fn $setter(
                    &mut self,
                    value: impl Into<<$kind as $crate::dto::Coercion>::Value>,
                ) -> &mut Self {
                    self.$field = value.into();
                    self
                }
            )*
        }

        impl $crate::dto::Dto for $name {
            fn fields() -> &'static [$crate::dto::FieldDescriptor<Self>] {
                static FIELDS: &[$crate::dto::FieldDescriptor<$name>] = &[
                    $(
                        $crate::dto::FieldDescriptor {
                            name: stringify!($field),
                            wire_key: $wire,
                            kind: <$kind as $crate::dto::Coercion>::KIND,
                            write: |dto: &$name| {
                                <$kind as $crate::dto::Coercion>::to_wire(&dto.$field)
                            },
                            read: |dto: &mut $name, value: &::serde_json::Value| {
                                <$kind as $crate::dto::Coercion>::from_wire($wire, value)
                                    .map(|parsed| dto.$field = parsed)
                            },
                            #[cfg(test)]
                            sample: <$kind as $crate::dto::Coercion>::sample,
                        },
                    )*
                ];
                FIELDS
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::dto::serialize_dto(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::dto::deserialize_dto(deserializer)
            }
        }

        impl $crate::api::RequestBody for $name {
            fn to_body(&self) -> Option<String> {
                Some($crate::dto::Dto::to_json(self, false))
            }
        }

        impl $crate::api::ResponseBody for $name {
            fn from_body(body: Option<&str>) -> $crate::types::AuthleteResult<Self> {
                match body {
                    Some(json) => <Self as $crate::dto::Dto>::from_json(json),
                    None => Err($crate::types::AuthleteError::Parse(
                        concat!("empty response body, expected ", stringify!($name)).to_string(),
                    )),
                }
            }
        }
    };
}

mod field;
mod tagged_value;

mod authorization;
mod backchannel;
mod client;
mod common;
mod device;
mod grant_management;
mod hsk;
mod introspection;
mod jose;
mod pushed_auth_req;
mod revocation;
mod service;
mod token;
mod userinfo;

pub use field::{
    Coercion, EnumList, EnumOf, FieldKind, Flag, IntOrStr, IntOrString, Integer, Nested,
    NestedList, OptionalInteger, Text, TextList, TriBool,
};
pub use tagged_value::TaggedValue;

pub use authorization::*;
pub use backchannel::*;
pub use client::*;
pub use common::*;
pub use device::*;
pub use grant_management::*;
pub use hsk::*;
pub use introspection::*;
pub use jose::*;
pub use pushed_auth_req::*;
pub use revocation::*;
pub use service::*;
pub use token::*;
pub use userinfo::*;

/// One entry of a DTO's field table
pub struct FieldDescriptor<D> {
    /// Name of the Rust field
    pub name: &'static str,
    /// Key of the field in the JSON object
    pub wire_key: &'static str,
    /// Coercion rule of the field
    pub kind: FieldKind,
    /// Renders the field's wire value
    pub write: fn(&D) -> Value,
    /// Coerces a wire value and assigns it. The field is left untouched on error.
    pub read: fn(&mut D, &Value) -> AuthleteResult<()>,
    #[cfg(test)]
    pub(crate) sample: fn(usize) -> Value,
}

impl<D> fmt::Debug for FieldDescriptor<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("wire_key", &self.wire_key)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The conversion contract shared by every DTO.
///
/// Implementors only supply [Dto::fields]; every conversion is derived from
/// that table.
pub trait Dto: Sized + Default + Clone + fmt::Debug + PartialEq + 'static {
    /// The DTO's fields in declaration order
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Looks up a field by its wire key
    fn field(wire_key: &str) -> Option<&'static FieldDescriptor<Self>> {
        Self::fields().iter().find(|f| f.wire_key == wire_key)
    }

    /// Converts the DTO to a JSON object keyed by wire keys, in declaration
    /// order. Unset optional fields are rendered as `null`.
    fn to_array(&self) -> Map<String, Value> {
        Self::fields()
            .iter()
            .map(|f| (f.wire_key.to_string(), (f.write)(self)))
            .collect()
    }

    /// Assigns every known key of `map` to its field. Unknown keys are ignored
    /// and absent keys leave their field as it is.
    fn apply_array(&mut self, map: &Map<String, Value>) -> AuthleteResult<()> {
        for field in Self::fields() {
            if let Some(value) = map.get(field.wire_key) {
                (field.read)(self, value)?;
            }
        }
        Ok(())
    }

    /// Builds a DTO from a JSON object, see [Dto::apply_array]
    fn from_array(map: &Map<String, Value>) -> AuthleteResult<Self> {
        let mut dto = Self::default();
        dto.apply_array(map)?;
        Ok(dto)
    }

    /// Assigns a single wire value to the field with the given wire key
    fn set_wire_value(&mut self, wire_key: &str, value: &Value) -> AuthleteResult<()> {
        match Self::field(wire_key) {
            Some(field) => (field.read)(self, value),
            None => Err(AuthleteError::validation(wire_key, "is not a known field")),
        }
    }

    /// Serializes the DTO to JSON text
    fn to_json(&self, pretty: bool) -> String {
        let value = Value::Object(self.to_array());

        if pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }

    /// Parses JSON text into a DTO. The text must hold a JSON object.
    fn from_json(json: &str) -> AuthleteResult<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Self::from_array(&map),
            Ok(other) => Err(AuthleteError::Parse(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
            Err(e) => Err(AuthleteError::Parse(e.to_string())),
        }
    }
}

/// Serializes an optional DTO. `None` stays `None` instead of becoming an
/// empty JSON object.
pub fn to_json<D: Dto>(dto: Option<&D>, pretty: bool) -> Option<String> {
    dto.map(|d| d.to_json(pretty))
}

/// Wire object with every field of `D` set to its kind's sample value.
/// Nested DTOs are filled the same way.
#[cfg(test)]
pub(crate) fn sample_array<D: Dto>() -> Map<String, Value> {
    D::fields()
        .iter()
        .enumerate()
        .map(|(index, f)| (f.wire_key.to_string(), (f.sample)(index)))
        .collect()
}

#[doc(hidden)]
pub fn serialize_dto<D: Dto, S: Serializer>(dto: &D, serializer: S) -> Result<S::Ok, S::Error> {
    dto.to_array().serialize(serializer)
}

#[doc(hidden)]
pub fn deserialize_dto<'de, D: Dto, De: Deserializer<'de>>(
    deserializer: De,
) -> Result<D, De::Error> {
    let map = Map::<String, Value>::deserialize(deserializer)?;
    D::from_array(&map).map_err(de::Error::custom)
}

#[cfg(test)]
#[path = "../tests/dto/mod.rs"]
mod dto_tests;
