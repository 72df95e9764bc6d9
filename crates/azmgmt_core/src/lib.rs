//! Service entity model for Windows Azure Management and Diagnostics clients.
//! Request builders and response parsers exchange these records; a small log
//! filter set gates the library's own diagnostics.

pub mod diagnostics;
pub mod entity;
pub mod log_filter;
pub mod logging;
pub mod management;

pub use diagnostics::performance_counter::{
    performance_counter_subscription, DEFAULT_SAMPLE_RATE_SECONDS, PERFORMANCE_COUNTER_SUBSCRIPTION,
};
pub use entity::error::{EntityError, EntityResult};
pub use entity::record::ServiceEntity;
pub use entity::schema::{EntitySchema, FieldDefault, FieldSpec, FieldTransform};
pub use entity::value::{FieldMap, FieldValue};
pub use log_filter::{
    filter_from_config, FilterConfigError, LogFilter, LogFilterConfig, SuppressFilter,
    SuppressState,
};
pub use logging::{
    default_log_level, init_logging, is_logging_suppressed, logging_status, suppress_logging,
};
pub use management::affinity_group::{affinity_group, AFFINITY_GROUP};
pub use management::certificate::{certificate, CERTIFICATE};
pub use management::subscription_operation::{
    operation_guid, subscription_operation, SUBSCRIPTION_OPERATION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
