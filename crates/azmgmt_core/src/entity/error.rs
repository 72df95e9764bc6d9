//! Service entity errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EntityResult<T> = Result<T, EntityError>;

/// Errors raised while building or accessing a service entity.
///
/// Every variant carries the entity kind so callers can tell which record
/// type rejected the access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// Read or write of a name the kind does not declare.
    UnknownField { kind: &'static str, field: String },
    /// A base64-marked field did not hold valid standard base64 text.
    /// Only leading/trailing whitespace is trimmed; line-wrapped input is rejected.
    Decode {
        kind: &'static str,
        field: &'static str,
        source: base64::DecodeError,
    },
    /// A mapping mutator targeted a field that does not hold a mapping.
    NotAMap {
        kind: &'static str,
        field: &'static str,
        found: &'static str,
    },
    /// A required positional argument was omitted.
    MissingArgument {
        kind: &'static str,
        field: &'static str,
    },
    /// More positional arguments than the kind declares fields.
    TooManyArguments {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    /// A field holds a value of the wrong shape (non-text base64 input, bad GUID).
    InvalidValue {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl Display for EntityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { kind, field } => {
                write!(f, "{kind} has no property `{field}`")
            }
            Self::Decode {
                kind,
                field,
                source,
            } => write!(f, "{kind}.{field} is not valid base64: {source}"),
            Self::NotAMap { kind, field, found } => {
                write!(f, "{kind}.{field} is not a mapping (found {found})")
            }
            Self::MissingArgument { kind, field } => {
                write!(f, "{kind} requires argument `{field}`")
            }
            Self::TooManyArguments {
                kind,
                expected,
                got,
            } => write!(
                f,
                "{kind} accepts at most {expected} arguments, got {got}"
            ),
            Self::InvalidValue {
                kind,
                field,
                reason,
            } => write!(f, "{kind}.{field} has an invalid value: {reason}"),
        }
    }
}

impl Error for EntityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
