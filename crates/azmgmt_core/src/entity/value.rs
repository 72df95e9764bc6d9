//! Typed field values stored inside a service entity.

use base64::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Nested mapping payload (for example `operationParameters`).
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A single field value.
///
/// `Bytes` only appears as the output of a base64-decoded field whose payload
/// is not valid UTF-8 (certificate blobs, for instance). It serializes as
/// standard base64 text and is never produced by deserialization; rebuild the
/// entity with `ServiceEntity::from_fields` to decode it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    List(Vec<FieldValue>),
    Map(FieldMap),
    #[serde(skip_deserializing)]
    Bytes(#[serde(serialize_with = "serialize_base64")] Vec<u8>),
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
}

impl FieldValue {
    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    pub fn empty_map() -> Self {
        Self::Map(FieldMap::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the raw bytes of a text or bytes value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Str(value) => Some(value.as_bytes()),
            Self::Bytes(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FieldMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Short type tag used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(values: Vec<FieldValue>) -> Self {
        Self::List(values)
    }
}

impl From<FieldMap> for FieldValue {
    fn from(map: FieldMap) -> Self {
        Self::Map(map)
    }
}
