//! Field kinds and their coercion rules.
//!
//! Each kind is a marker type implementing [Coercion]: it names the Rust type
//! a field is stored as, how that value is rendered on the wire, and how a
//! wire value is read back into it.
//!
//! | kind | stored as | accepted on the wire |
//! |---|---|---|
//! | [Text] | `Option<String>` | string, null |
//! | [IntOrStr] | `Option<IntOrString>` | integer, string, null |
//! | [Integer] | `i64` | integer, numeric string, null (as `0`) |
//! | [OptionalInteger] | `Option<i64>` | integer, numeric string, null |
//! | [Flag] | `bool` | bool, string (`"true"` case-insensitively, anything else is false), null (as `false`) |
//! | [TriBool] | `Option<bool>` | bool, null |
//! | [EnumOf] | `Option<E>` | exact canonical name, null |
//! | [EnumList] | `Option<Vec<E>>` | array of exact canonical names, null |
//! | [TextList] | `Option<Vec<String>>` | array of strings, null |
//! | [Nested] | `Option<D>` | object, null |
//! | [NestedList] | `Option<Vec<D>>` | array of objects, null |

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Number, Value};

use crate::{
    enums::AuthleteEnum,
    helpers::{coercion, validation},
    types::{AuthleteError, AuthleteResult},
};

use super::Dto;

/// Shape of a field, as recorded in a DTO's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// See [Text]
    Text,
    /// See [IntOrStr]
    IntOrStr,
    /// See [Integer]
    Integer,
    /// See [OptionalInteger]
    OptionalInteger,
    /// See [Flag]
    Flag,
    /// See [TriBool]
    TriBool,
    /// See [EnumOf]. Carries the canonical names of the enum.
    Enum(&'static [&'static str]),
    /// See [EnumList]. Carries the canonical names of the enum.
    EnumList(&'static [&'static str]),
    /// See [TextList]
    TextList,
    /// See [Nested]
    Nested,
    /// See [NestedList]
    NestedList,
}

/// The coercion rule of one field kind
pub trait Coercion: 'static {
    /// In-memory type of the field
    type Value: Clone + fmt::Debug + Default + PartialEq;
    /// What the getter hands out
    type Ref<'a>
    where
        Self: 'a;

    /// Kind recorded in the field table
    const KIND: FieldKind;

    /// Borrows the stored value for a getter
    fn borrow(value: &Self::Value) -> Self::Ref<'_>;

    /// Wire representation of the stored value
    fn to_wire(value: &Self::Value) -> Value;

    /// Reads a wire value assigned to the field `field`
    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value>;

    /// A non-default wire value the field accepts, varied by `index`
    #[cfg(test)]
    fn sample(index: usize) -> Value;
}

/// Plain string
pub struct Text;

impl Coercion for Text {
    type Value = Option<String>;
    type Ref<'a> = Option<&'a str>;

    const KIND: FieldKind = FieldKind::Text;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_deref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.clone().map_or(Value::Null, Value::String)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        validation::ensure_null_or_string(field, value)?;
        Ok(value.as_str().map(str::to_string))
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        serde_json::json!(format!("text-{index}"))
    }
}

/// Identifier or number that may arrive either as a JSON integer or as a
/// string. Whichever representation was supplied is kept.
pub struct IntOrStr;

impl Coercion for IntOrStr {
    type Value = Option<IntOrString>;
    type Ref<'a> = Option<&'a IntOrString>;

    const KIND: FieldKind = FieldKind::IntOrStr;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_ref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.as_ref().map_or(Value::Null, IntOrString::to_wire)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        validation::ensure_null_or_integer_or_string(field, value)?;
        Ok(match value {
            Value::Number(n) => Some(IntOrString::from_number(n)),
            Value::String(s) => Some(IntOrString::Str(s.clone())),
            _ => None,
        })
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        if index % 2 == 0 {
            Value::from(1000 + index as i64)
        } else {
            Value::String(format!("id-{index}"))
        }
    }
}

/// Counter such as a pagination offset. Read with
/// [parse_integer](crate::helpers::parse_integer).
pub struct Integer;

impl Coercion for Integer {
    type Value = i64;
    type Ref<'a> = i64;

    const KIND: FieldKind = FieldKind::Integer;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        *value
    }

    fn to_wire(value: &Self::Value) -> Value {
        Value::from(*value)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        coercion::parse_integer(value)
            .ok_or_else(|| AuthleteError::validation(field, "must be an integer"))
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        Value::from(index as i64 + 1)
    }
}

/// Integer that distinguishes "not set" from `0`, e.g. an optional range
/// bound. Read with [parse_integer](crate::helpers::parse_integer).
pub struct OptionalInteger;

impl Coercion for OptionalInteger {
    type Value = Option<i64>;
    type Ref<'a> = Option<i64>;

    const KIND: FieldKind = FieldKind::OptionalInteger;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        *value
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.map_or(Value::Null, Value::from)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        if value.is_null() {
            return Ok(None);
        }

        coercion::parse_integer(value)
            .map(Some)
            .ok_or_else(|| AuthleteError::validation(field, "must be null or an integer"))
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        Value::from(index as i64 + 1)
    }
}

/// Boolean flag, `false` unless set. Read with
/// [parse_boolean](crate::helpers::parse_boolean).
pub struct Flag;

impl Coercion for Flag {
    type Value = bool;
    type Ref<'a> = bool;

    const KIND: FieldKind = FieldKind::Flag;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        *value
    }

    fn to_wire(value: &Self::Value) -> Value {
        Value::Bool(*value)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        coercion::parse_boolean(value)
            .ok_or_else(|| AuthleteError::validation(field, "must be a boolean"))
    }

    #[cfg(test)]
    fn sample(_: usize) -> Value {
        Value::Bool(true)
    }
}

/// Boolean that distinguishes "not set" from `false`
pub struct TriBool;

impl Coercion for TriBool {
    type Value = Option<bool>;
    type Ref<'a> = Option<bool>;

    const KIND: FieldKind = FieldKind::TriBool;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        *value
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.map_or(Value::Null, Value::Bool)
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        validation::ensure_null_or_boolean(field, value)?;
        Ok(value.as_bool())
    }

    #[cfg(test)]
    fn sample(_: usize) -> Value {
        Value::Bool(false)
    }
}

/// One member of a closed enum set
pub struct EnumOf<E>(PhantomData<E>);

impl<E: AuthleteEnum> Coercion for EnumOf<E> {
    type Value = Option<E>;
    type Ref<'a> = Option<E>;

    const KIND: FieldKind = FieldKind::Enum(E::NAMES);

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        *value
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.map_or(Value::Null, |e| Value::String(e.name().to_string()))
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        E::from_wire(field, value)
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        Value::String(E::NAMES[index % E::NAMES.len()].to_string())
    }
}

/// Ordered list of members of a closed enum set
pub struct EnumList<E>(PhantomData<E>);

impl<E: AuthleteEnum> Coercion for EnumList<E> {
    type Value = Option<Vec<E>>;
    type Ref<'a> = Option<&'a [E]>;

    const KIND: FieldKind = FieldKind::EnumList(E::NAMES);

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_deref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.as_ref().map_or(Value::Null, |items| {
            Value::Array(
                items
                    .iter()
                    .map(|e| Value::String(e.name().to_string()))
                    .collect(),
            )
        })
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut parsed = Vec::with_capacity(items.len());
                for item in items {
                    match E::from_wire(field, item)? {
                        Some(e) => parsed.push(e),
                        None => {
                            return Err(AuthleteError::type_error(field, "string", item));
                        }
                    }
                }
                Ok(Some(parsed))
            }
            _ => Err(AuthleteError::validation(
                field,
                format!("must be null or an array of {} names", E::TYPE_NAME),
            )),
        }
    }

    #[cfg(test)]
    fn sample(_: usize) -> Value {
        serde_json::json!([E::NAMES[0], E::NAMES[E::NAMES.len() - 1]])
    }
}

/// Ordered list of strings
pub struct TextList;

impl Coercion for TextList {
    type Value = Option<Vec<String>>;
    type Ref<'a> = Option<&'a [String]>;

    const KIND: FieldKind = FieldKind::TextList;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_deref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.as_ref().map_or(Value::Null, |items| {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        })
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        validation::ensure_null_or_array_of_string(field, value)?;
        Ok(value.as_array().map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        }))
    }

    #[cfg(test)]
    fn sample(index: usize) -> Value {
        serde_json::json!(["a", format!("b-{index}")])
    }
}

/// A nested DTO
pub struct Nested<D>(PhantomData<D>);

impl<D: Dto> Coercion for Nested<D> {
    type Value = Option<D>;
    type Ref<'a> = Option<&'a D>;

    const KIND: FieldKind = FieldKind::Nested;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_ref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value
            .as_ref()
            .map_or(Value::Null, |d| Value::Object(d.to_array()))
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => D::from_array(map).map(Some),
            other => Err(AuthleteError::type_error(field, "object", other)),
        }
    }

    #[cfg(test)]
    fn sample(_: usize) -> Value {
        Value::Object(super::sample_array::<D>())
    }
}

/// Ordered list of nested DTOs
pub struct NestedList<D>(PhantomData<D>);

impl<D: Dto> Coercion for NestedList<D> {
    type Value = Option<Vec<D>>;
    type Ref<'a> = Option<&'a [D]>;

    const KIND: FieldKind = FieldKind::NestedList;

    fn borrow(value: &Self::Value) -> Self::Ref<'_> {
        value.as_deref()
    }

    fn to_wire(value: &Self::Value) -> Value {
        value.as_ref().map_or(Value::Null, |items| {
            Value::Array(
                items
                    .iter()
                    .map(|d| Value::Object(d.to_array()))
                    .collect(),
            )
        })
    }

    fn from_wire(field: &str, value: &Value) -> AuthleteResult<Self::Value> {
        validation::ensure_null_or_array_of_object(field, value)?;
        match value.as_array() {
            None => Ok(None),
            Some(items) => items
                .iter()
                .filter_map(Value::as_object)
                .map(D::from_array)
                .collect::<AuthleteResult<Vec<D>>>()
                .map(Some),
        }
    }

    #[cfg(test)]
    fn sample(_: usize) -> Value {
        Value::Array(vec![
            Value::Object(super::sample_array::<D>()),
            Value::Object(super::sample_array::<D>()),
        ])
    }
}

/// A value the Authlete API may send either as a JSON integer or as a
/// string, e.g. client IDs that exceed the precision of some JSON parsers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntOrString {
    /// Sent as a JSON integer
    Int(i64),
    /// Sent as a string, or as an integer too large for `i64`
    Str(String),
}

impl IntOrString {
    fn from_number(n: &Number) -> Self {
        match n.as_i64() {
            Some(i) => IntOrString::Int(i),
            None => IntOrString::Str(n.to_string()),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            IntOrString::Int(i) => Value::from(*i),
            IntOrString::Str(s) => Value::String(s.clone()),
        }
    }

    /// Numeric value, when the string form holds an `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(i) => Some(*i),
            IntOrString::Str(s) => s.parse().ok(),
        }
    }

    /// Whether the value is an integer in either representation
    pub fn is_numeric(&self) -> bool {
        match self {
            IntOrString::Int(_) => true,
            IntOrString::Str(s) => coercion::is_integer_string(s),
        }
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntOrString::Int(i) => write!(f, "{i}"),
            IntOrString::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IntOrString {
    fn from(value: i64) -> Self {
        IntOrString::Int(value)
    }
}

impl From<String> for IntOrString {
    fn from(value: String) -> Self {
        IntOrString::Str(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        IntOrString::Str(value.to_string())
    }
}
