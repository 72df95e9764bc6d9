//! Performance counter subscription for diagnostics configuration.

use crate::entity::error::EntityResult;
use crate::entity::record::ServiceEntity;
use crate::entity::schema::{EntitySchema, FieldDefault, FieldSpec};
use crate::entity::value::FieldValue;

/// Sample rate applied when the caller omits one.
pub const DEFAULT_SAMPLE_RATE_SECONDS: i64 = 1;

pub static PERFORMANCE_COUNTER_SUBSCRIPTION: EntitySchema = EntitySchema {
    kind: "PerformanceCounterSubscription",
    fields: &[
        FieldSpec::required("counterSpecifier"),
        FieldSpec::optional(
            "sampleRateInSeconds",
            FieldDefault::Int(DEFAULT_SAMPLE_RATE_SECONDS),
        ),
    ],
};

/// Builds a counter subscription, e.g. `\Processor(_Total)\% Processor Time`.
pub fn performance_counter_subscription(
    counter_specifier: impl Into<String>,
    sample_rate_in_seconds: Option<i64>,
) -> EntityResult<ServiceEntity> {
    let mut args = vec![FieldValue::Str(counter_specifier.into())];
    if let Some(rate) = sample_rate_in_seconds {
        args.push(FieldValue::Int(rate));
    }
    ServiceEntity::new(&PERFORMANCE_COUNTER_SUBSCRIPTION, args)
}
