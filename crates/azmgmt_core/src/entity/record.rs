//! Schema-driven service entity record.
//!
//! # Responsibility
//! - Own the field storage of one management/diagnostics descriptor.
//! - Apply construction-time transforms (base64) exactly once.
//! - Provide case-insensitive, schema-checked read/write access.
//!
//! # Invariants
//! - Storage keys are the lower-cased declared names, in schema order.
//! - Every declared field is present after construction; optional fields
//!   hold their default (empty list/map or integer), never an absent value.
//! - Access to an undeclared name is always an error, never a default.

use crate::entity::error::{EntityError, EntityResult};
use crate::entity::schema::{EntitySchema, FieldSpec, FieldTransform};
use crate::entity::value::{FieldMap, FieldValue};
use base64::prelude::*;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One descriptor record returned by (or sent to) the management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntity {
    schema: &'static EntitySchema,
    fields: Vec<(String, FieldValue)>,
}

impl ServiceEntity {
    /// Builds an entity from positional arguments in schema order.
    ///
    /// Omitted trailing optional arguments take their schema default.
    ///
    /// # Errors
    /// - `MissingArgument` when a required argument is omitted.
    /// - `TooManyArguments` when more arguments than fields are passed.
    /// - `Decode` / `InvalidValue` when a base64 field cannot be decoded.
    pub fn new(schema: &'static EntitySchema, args: Vec<FieldValue>) -> EntityResult<Self> {
        if args.len() > schema.fields.len() {
            return Err(EntityError::TooManyArguments {
                kind: schema.kind,
                expected: schema.fields.len(),
                got: args.len(),
            });
        }

        let mut args = args.into_iter();
        Self::build(schema, |_| args.next())
    }

    /// Builds an entity from named values, e.g. a map read back from JSON.
    ///
    /// Names match declared fields ignoring case; base64 fields are decoded
    /// exactly as in [`ServiceEntity::new`], so this inverts `Serialize`.
    ///
    /// # Errors
    /// - `UnknownField` for a name the kind does not declare.
    /// - Same construction errors as [`ServiceEntity::new`].
    pub fn from_fields(schema: &'static EntitySchema, fields: FieldMap) -> EntityResult<Self> {
        let mut named: Vec<(String, FieldValue)> = fields.into_iter().collect();
        if let Some((name, _)) = named.iter().find(|(name, _)| schema.position(name).is_none()) {
            return Err(EntityError::UnknownField {
                kind: schema.kind,
                field: name.clone(),
            });
        }

        Self::build(schema, |spec| {
            let index = named
                .iter()
                .position(|(name, _)| spec.name.eq_ignore_ascii_case(name))?;
            Some(named.swap_remove(index).1)
        })
    }

    fn build(
        schema: &'static EntitySchema,
        mut next: impl FnMut(&'static FieldSpec) -> Option<FieldValue>,
    ) -> EntityResult<Self> {
        let mut fields = Vec::with_capacity(schema.fields.len());
        for spec in schema.fields {
            let raw = match next(spec) {
                Some(value) => value,
                None => spec.default.value().ok_or(EntityError::MissingArgument {
                    kind: schema.kind,
                    field: spec.name,
                })?,
            };
            let stored = match spec.transform {
                FieldTransform::Plain => raw,
                FieldTransform::Base64 => decode_base64(schema.kind, spec.name, raw)?,
            };
            fields.push((spec.key(), stored));
        }

        debug!(
            "event=entity_build module=entity status=ok kind={} fields={}",
            schema.kind,
            fields.len()
        );
        Ok(Self { schema, fields })
    }

    /// Record type name, e.g. `AffinityGroupInstance`.
    pub fn kind(&self) -> &'static str {
        self.schema.kind
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    /// Returns whether `name` is a declared field (any casing).
    pub fn contains(&self, name: &str) -> bool {
        self.schema.position(name).is_some()
    }

    /// Reads one field by its declared name, ignoring case.
    pub fn get(&self, name: &str) -> EntityResult<&FieldValue> {
        let index = self.index_of(name)?;
        Ok(&self.fields[index].1)
    }

    /// Replaces one field, stored verbatim.
    ///
    /// Construction-time transforms are not reapplied.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> EntityResult<()> {
        let index = self.index_of(name)?;
        self.fields[index].1 = value.into();
        Ok(())
    }

    /// Inserts `key -> value` into the nested mapping held by `field`.
    ///
    /// Existing entries are kept; an entry with the same key is replaced.
    ///
    /// # Errors
    /// - `UnknownField` when `field` is not declared.
    /// - `NotAMap` when the field currently holds anything but a mapping.
    pub fn insert_into_map(
        &mut self,
        field: &str,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> EntityResult<()> {
        let index = self.index_of(field)?;
        let kind = self.schema.kind;
        let declared = self.schema.fields[index].name;
        match &mut self.fields[index].1 {
            FieldValue::Map(map) => {
                map.insert(key.into(), value.into());
                Ok(())
            }
            other => Err(EntityError::NotAMap {
                kind,
                field: declared,
                found: other.type_name(),
            }),
        }
    }

    /// Iterates `(lower-cased name, value)` pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn index_of(&self, name: &str) -> EntityResult<usize> {
        self.schema
            .position(name)
            .ok_or_else(|| EntityError::UnknownField {
                kind: self.schema.kind,
                field: name.to_string(),
            })
    }
}

/// Serializes the wire form: base64 fields are re-encoded, so the output can
/// be fed back through [`ServiceEntity::from_fields`].
impl Serialize for ServiceEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (spec, (key, value)) in self.schema.fields.iter().zip(&self.fields) {
            match (spec.transform, value.as_bytes()) {
                (FieldTransform::Base64, Some(bytes)) => {
                    map.serialize_entry(key, &BASE64_STANDARD.encode(bytes))?
                }
                _ => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

/// Decodes standard base64 text; UTF-8 payloads become text, others bytes.
fn decode_base64(
    kind: &'static str,
    field: &'static str,
    raw: FieldValue,
) -> EntityResult<FieldValue> {
    let encoded = match &raw {
        FieldValue::Str(text) => text.trim(),
        other => {
            return Err(EntityError::InvalidValue {
                kind,
                field,
                reason: format!("expected base64 text, found {}", other.type_name()),
            })
        }
    };

    let decoded = BASE64_STANDARD
        .decode(encoded)
        .map_err(|source| EntityError::Decode {
            kind,
            field,
            source,
        })?;

    Ok(match String::from_utf8(decoded) {
        Ok(text) => FieldValue::Str(text),
        Err(err) => FieldValue::Bytes(err.into_bytes()),
    })
}

#[cfg(test)]
mod tests {
    use super::ServiceEntity;
    use crate::entity::error::EntityError;
    use crate::entity::schema::{EntitySchema, FieldDefault, FieldSpec};
    use crate::entity::value::{FieldMap, FieldValue};

    static WIDGET: EntitySchema = EntitySchema {
        kind: "WidgetInstance",
        fields: &[
            FieldSpec::required("widgetName"),
            FieldSpec::base64("label"),
            FieldSpec::optional("settings", FieldDefault::EmptyMap),
        ],
    };

    fn widget() -> ServiceEntity {
        ServiceEntity::new(&WIDGET, vec!["w1".into(), "Zm9v".into()]).expect("widget")
    }

    #[test]
    fn stores_lower_cased_keys_in_order() {
        let entity = widget();
        let keys: Vec<&str> = entity.fields().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["widgetname", "label", "settings"]);
    }

    #[test]
    fn decodes_base64_fields_once() {
        let mut entity = widget();
        assert_eq!(entity.get("label").unwrap(), &FieldValue::from("foo"));

        entity.set("LABEL", "Zm9v").unwrap();
        assert_eq!(entity.get("label").unwrap(), &FieldValue::from("Zm9v"));
    }

    #[test]
    fn keeps_binary_payloads_as_bytes() {
        let entity = ServiceEntity::new(&WIDGET, vec!["w".into(), "/wA=".into()]).unwrap();
        assert_eq!(entity.get("label").unwrap(), &FieldValue::Bytes(vec![0xff, 0x00]));
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = ServiceEntity::new(&WIDGET, vec!["w".into(), "not base64!".into()])
            .expect_err("malformed base64 must fail");
        assert!(matches!(
            err,
            EntityError::Decode {
                kind: "WidgetInstance",
                field: "label",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_text_base64_input() {
        let err = ServiceEntity::new(&WIDGET, vec!["w".into(), FieldValue::Int(3)]).unwrap_err();
        assert!(matches!(err, EntityError::InvalidValue { field: "label", .. }));
    }

    #[test]
    fn validates_argument_count() {
        let err = ServiceEntity::new(&WIDGET, vec!["w".into()]).unwrap_err();
        assert_eq!(
            err,
            EntityError::MissingArgument {
                kind: "WidgetInstance",
                field: "label"
            }
        );

        let err = ServiceEntity::new(
            &WIDGET,
            vec!["w".into(), "Zm9v".into(), FieldValue::empty_map(), "x".into()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            EntityError::TooManyArguments {
                kind: "WidgetInstance",
                expected: 3,
                got: 4
            }
        );
    }

    #[test]
    fn insert_into_map_requires_mapping_field() {
        let mut entity = widget();
        entity.insert_into_map("Settings", "color", "red").unwrap();
        entity.insert_into_map("settings", "size", 3).unwrap();
        let settings = entity.get("settings").unwrap().as_map().unwrap();
        assert_eq!(settings.len(), 2);

        let err = entity.insert_into_map("widgetName", "k", "v").unwrap_err();
        assert_eq!(
            err,
            EntityError::NotAMap {
                kind: "WidgetInstance",
                field: "widgetName",
                found: "string"
            }
        );
    }

    #[test]
    fn serializes_as_json_object() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["widgetname"], "w1");
        assert_eq!(json["label"], "Zm9v");
        assert!(json["settings"].as_object().unwrap().is_empty());
    }

    #[test]
    fn from_fields_matches_names_ignoring_case() {
        let mut named = FieldMap::new();
        named.insert("WIDGETNAME".to_string(), FieldValue::from("w1"));
        named.insert("Label".to_string(), FieldValue::from("Zm9v"));
        let entity = ServiceEntity::from_fields(&WIDGET, named).unwrap();
        assert_eq!(entity, widget());
    }

    #[test]
    fn from_fields_rejects_undeclared_names() {
        let mut named = FieldMap::new();
        named.insert("widgetName".to_string(), FieldValue::from("w1"));
        named.insert("label".to_string(), FieldValue::from("Zm9v"));
        named.insert("colour".to_string(), FieldValue::from("red"));
        let err = ServiceEntity::from_fields(&WIDGET, named).unwrap_err();
        assert_eq!(
            err,
            EntityError::UnknownField {
                kind: "WidgetInstance",
                field: "colour".to_string()
            }
        );
    }

    #[test]
    fn from_fields_requires_required_fields() {
        let mut named = FieldMap::new();
        named.insert("label".to_string(), FieldValue::from("Zm9v"));
        let err = ServiceEntity::from_fields(&WIDGET, named).unwrap_err();
        assert_eq!(
            err,
            EntityError::MissingArgument {
                kind: "WidgetInstance",
                field: "widgetName"
            }
        );
    }

    #[test]
    fn binary_payload_survives_json_round_trip() {
        let entity = ServiceEntity::new(&WIDGET, vec!["w".into(), "/wA=".into()]).unwrap();
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["label"], "/wA=");

        let named: FieldMap = serde_json::from_value(json).unwrap();
        let restored = ServiceEntity::from_fields(&WIDGET, named).unwrap();
        assert_eq!(restored.get("label").unwrap(), &FieldValue::Bytes(vec![0xff, 0x00]));
        assert_eq!(restored, entity);
    }

    #[test]
    fn rejects_line_wrapped_base64_but_trims_edges() {
        let entity = ServiceEntity::new(&WIDGET, vec!["w".into(), "  Zm9v\n".into()]).unwrap();
        assert_eq!(entity.get("label").unwrap(), &FieldValue::from("foo"));

        let err = ServiceEntity::new(&WIDGET, vec!["w".into(), "Zm9v\nYmFy".into()]).unwrap_err();
        assert!(matches!(err, EntityError::Decode { field: "label", .. }));
    }
}
