//! Affinity group descriptor.

use crate::entity::error::EntityResult;
use crate::entity::record::ServiceEntity;
use crate::entity::schema::{EntitySchema, FieldDefault, FieldSpec};
use crate::entity::value::FieldValue;

/// `label` arrives base64-encoded from the management API.
pub static AFFINITY_GROUP: EntitySchema = EntitySchema {
    kind: "AffinityGroupInstance",
    fields: &[
        FieldSpec::required("name"),
        FieldSpec::base64("label"),
        FieldSpec::required("description"),
        FieldSpec::required("location"),
        FieldSpec::optional("hostedServices", FieldDefault::EmptyList),
        FieldSpec::optional("storageServices", FieldDefault::EmptyList),
    ],
};

/// Builds an affinity group record.
///
/// `None` for either service list stores an empty list.
pub fn affinity_group(
    name: impl Into<String>,
    label_base64: impl Into<String>,
    description: impl Into<String>,
    location: impl Into<String>,
    hosted_services: Option<Vec<FieldValue>>,
    storage_services: Option<Vec<FieldValue>>,
) -> EntityResult<ServiceEntity> {
    ServiceEntity::new(
        &AFFINITY_GROUP,
        vec![
            FieldValue::Str(name.into()),
            FieldValue::Str(label_base64.into()),
            FieldValue::Str(description.into()),
            FieldValue::Str(location.into()),
            hosted_services.map_or_else(FieldValue::empty_list, FieldValue::List),
            storage_services.map_or_else(FieldValue::empty_list, FieldValue::List),
        ],
    )
}
