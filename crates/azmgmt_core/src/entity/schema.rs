//! Field schemas describing one concrete entity kind.
//!
//! # Responsibility
//! - Declare the ordered field list of each entity kind.
//! - Mark which fields are base64-decoded at construction.
//!
//! # Invariants
//! - Required fields precede optional ones, so positional arguments map
//!   one-to-one onto `fields`.
//! - Field names are unique ignoring ASCII case.

use crate::entity::value::FieldValue;

/// Construction-time transform applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransform {
    /// Stored verbatim.
    Plain,
    /// Standard base64 text, decoded once before storage.
    Base64,
}

/// Value used when a positional argument is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Required,
    EmptyList,
    EmptyMap,
    Int(i64),
}

impl FieldDefault {
    /// Materializes the default, `None` for required fields.
    pub fn value(self) -> Option<FieldValue> {
        match self {
            Self::Required => None,
            Self::EmptyList => Some(FieldValue::empty_list()),
            Self::EmptyMap => Some(FieldValue::empty_map()),
            Self::Int(value) => Some(FieldValue::Int(value)),
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared property name, e.g. `hostedServices`.
    pub name: &'static str,
    pub transform: FieldTransform,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            transform: FieldTransform::Plain,
            default: FieldDefault::Required,
        }
    }

    pub const fn base64(name: &'static str) -> Self {
        Self {
            name,
            transform: FieldTransform::Base64,
            default: FieldDefault::Required,
        }
    }

    pub const fn optional(name: &'static str, default: FieldDefault) -> Self {
        Self {
            name,
            transform: FieldTransform::Plain,
            default,
        }
    }

    pub fn is_required(&self) -> bool {
        self.default == FieldDefault::Required
    }

    /// Storage key: the declared name lower-cased.
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Ordered field schema for one entity kind.
#[derive(Debug, PartialEq, Eq)]
pub struct EntitySchema {
    /// Record type name used in errors, e.g. `CertificateInstance`.
    pub kind: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Case-insensitive position of a declared field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        self.position(name).map(|index| &fields[index])
    }

    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|spec| spec.is_required()).count()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}
