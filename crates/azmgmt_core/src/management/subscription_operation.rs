//! Subscription operation (activity log) descriptor.
//!
//! # Invariants
//! - `operationParameters`, `operationCaller` and `operationStatus` default
//!   to empty mappings.
//! - `add_operation_parameter` inserts one entry and keeps the others.

use crate::entity::error::{EntityError, EntityResult};
use crate::entity::record::ServiceEntity;
use crate::entity::schema::{EntitySchema, FieldDefault, FieldSpec};
use crate::entity::value::{FieldMap, FieldValue};
use uuid::Uuid;

const OPERATION_PARAMETERS: &str = "operationParameters";

pub static SUBSCRIPTION_OPERATION: EntitySchema = EntitySchema {
    kind: "SubscriptionOperationInstance",
    fields: &[
        FieldSpec::required("operationId"),
        FieldSpec::required("operationObjectId"),
        FieldSpec::required("operationName"),
        FieldSpec::optional(OPERATION_PARAMETERS, FieldDefault::EmptyMap),
        FieldSpec::optional("operationCaller", FieldDefault::EmptyMap),
        FieldSpec::optional("operationStatus", FieldDefault::EmptyMap),
    ],
};

/// Builds a subscription operation; each `None` map stores an empty mapping.
pub fn subscription_operation(
    operation_id: impl Into<String>,
    operation_object_id: impl Into<String>,
    operation_name: impl Into<String>,
    operation_parameters: Option<FieldMap>,
    operation_caller: Option<FieldMap>,
    operation_status: Option<FieldMap>,
) -> EntityResult<ServiceEntity> {
    ServiceEntity::new(
        &SUBSCRIPTION_OPERATION,
        vec![
            FieldValue::Str(operation_id.into()),
            FieldValue::Str(operation_object_id.into()),
            FieldValue::Str(operation_name.into()),
            operation_parameters.map_or_else(FieldValue::empty_map, FieldValue::Map),
            operation_caller.map_or_else(FieldValue::empty_map, FieldValue::Map),
            operation_status.map_or_else(FieldValue::empty_map, FieldValue::Map),
        ],
    )
}

impl ServiceEntity {
    /// Adds one named parameter to `operationParameters`.
    ///
    /// Fails with `UnknownField` on kinds without that field.
    pub fn add_operation_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> EntityResult<()> {
        self.insert_into_map(OPERATION_PARAMETERS, name, value)
    }
}

/// Parses `operationId` as a GUID.
pub fn operation_guid(entity: &ServiceEntity) -> EntityResult<Uuid> {
    let raw = entity.get("operationId")?;
    let text = raw.as_str().ok_or_else(|| EntityError::InvalidValue {
        kind: entity.kind(),
        field: "operationId",
        reason: format!("expected string, found {}", raw.type_name()),
    })?;
    Uuid::parse_str(text.trim()).map_err(|err| EntityError::InvalidValue {
        kind: entity.kind(),
        field: "operationId",
        reason: err.to_string(),
    })
}
