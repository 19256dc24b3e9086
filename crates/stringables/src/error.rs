//! Error types for constructing, converting, and combining stringable values.

use thiserror::Error;

/// Errors that can occur while building a value from raw input.
///
/// Every user-facing failure (bad syntax, out of bounds, unknown option) is
/// reported through this one type so callers only need a single failure
/// channel. [`StringableError::Configuration`] marks faults in how a kind was
/// declared rather than in what the user typed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StringableError {
    /// The input could not be converted or did not pass validation.
    #[error("{reason}: {value}")]
    Invalid { value: String, reason: String },

    /// A number carries a unit that has no converter to the requested unit.
    #[error("Cannot convert {from} to {to}")]
    UnitConversion { from: String, to: String },

    /// An arithmetic operation has no defined result (e.g. division by zero).
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// The kind itself is misconfigured (e.g. an option set with no options).
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A kind declaration could not be read from JSON.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// Every member of a multitype rejected the input.
    #[error("{}", join_messages(.0))]
    NoMatch(Vec<StringableError>),
}

impl StringableError {
    pub(crate) fn invalid(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error points at a programming fault instead of bad input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Json(_))
    }
}

impl From<serde_json::Error> for StringableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

fn join_messages(errors: &[StringableError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias used throughout stringables.
pub type Result<T> = std::result::Result<T, StringableError>;
