//! Log admission filters.
//!
//! # Responsibility
//! - Define the per-event admission seam used by the logging pipeline.
//! - Build filters from declarative configuration records.
//!
//! # Invariants
//! - Filters decide per `log::Record` and never mutate the record.
//! - Filter selection by name is case-insensitive.

pub mod suppress;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use suppress::{SuppressFilter, SuppressState};

/// Filter name accepted by [`filter_from_config`] for [`SuppressFilter`].
pub const FILTER_SUPPRESS: &str = "suppress";

/// Decides whether one log event proceeds down the pipeline.
pub trait LogFilter {
    fn accept(&self, record: &log::Record<'_>) -> bool;
}

/// Declarative filter configuration, e.g. from a JSON settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogFilterConfig {
    #[serde(alias = "filterName")]
    pub filter_name: String,
    /// Filter-specific options. Unrecognized keys are ignored.
    #[serde(default)]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl LogFilterConfig {
    pub fn named(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            params: BTreeMap::new(),
        }
    }
}

/// Filter construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterConfigError {
    EmptyFilterName,
    UnknownFilter(String),
}

impl Display for FilterConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFilterName => write!(f, "log filter name must not be empty"),
            Self::UnknownFilter(value) => write!(f, "log filter is unsupported: {value}"),
        }
    }
}

impl Error for FilterConfigError {}

/// Builds the filter named by `config.filter_name`.
pub fn filter_from_config(
    config: &LogFilterConfig,
) -> Result<Box<dyn LogFilter + Send + Sync>, FilterConfigError> {
    let name = config.filter_name.trim();
    if name.is_empty() {
        return Err(FilterConfigError::EmptyFilterName);
    }

    if name.eq_ignore_ascii_case(FILTER_SUPPRESS) {
        return Ok(Box::new(SuppressFilter::factory(config)));
    }
    Err(FilterConfigError::UnknownFilter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{filter_from_config, FilterConfigError, LogFilterConfig};

    #[test]
    fn rejects_empty_filter_name() {
        let err = filter_from_config(&LogFilterConfig::named("  ")).err();
        assert_eq!(err, Some(FilterConfigError::EmptyFilterName));
    }

    #[test]
    fn rejects_unknown_filter_name() {
        let err = filter_from_config(&LogFilterConfig::named("Priority")).err();
        assert_eq!(
            err,
            Some(FilterConfigError::UnknownFilter("Priority".to_string()))
        );
    }

    #[test]
    fn deserializes_camel_case_alias() {
        let config: LogFilterConfig =
            serde_json::from_str(r#"{"filterName":"Suppress","params":{"anything":1}}"#)
                .unwrap();
        assert_eq!(config.filter_name, "Suppress");
        assert_eq!(config.params["anything"], serde_json::json!(1));
    }
}
