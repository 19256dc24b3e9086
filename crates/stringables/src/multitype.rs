//! Kinds that accept any of several member kinds.
//!
//! Members are tried in order and the first one that accepts the input wins.
//! When every member rejects it, all of their messages are reported together
//! so the user can see why each interpretation failed.
//!
//! The produced value keeps the tag of the member that built it. Asking
//! whether a value belongs to the multitype is a tag comparison against the
//! member kinds, so callers can still branch on which member matched.
//!
//! ```
//! use stringables::{BoolValue, Kind, Multitype, Number, NumberOptions, Stringable};
//!
//! let limit = Multitype::new(vec![
//!     BoolValue::partial(Default::default()).into(),
//!     Number::partial(NumberOptions::integer()).into(),
//! ]);
//! assert_eq!(limit.typename(), "boolean or number");
//!
//! let value = limit.construct("42").unwrap();
//! assert!(value.is(Kind::Integer));
//! assert!(limit.construct("maybe").is_err());
//! ```

use crate::error::{Result, StringableError};
use crate::kind::{Constructor, Kind, Value};
use crate::value::Input;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered union of member constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multitype {
    members: Vec<Constructor>,
}

impl Multitype {
    pub fn new(members: Vec<Constructor>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Constructor] {
        &self.members
    }

    /// Member kinds in declaration order, without repetitions.
    pub fn kinds(&self) -> Vec<Kind> {
        let mut kinds = Vec::new();
        for member in &self.members {
            if !kinds.contains(&member.kind()) {
                kinds.push(member.kind());
            }
        }
        kinds
    }

    /// Distinct member typenames joined with `" or "`.
    pub fn typename(&self) -> String {
        let mut names: Vec<&str> = Vec::new();
        for member in &self.members {
            let name = member.typename();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names.join(" or ")
    }

    /// Member syntaxes joined with `" or "`.
    pub fn syntax(&self) -> String {
        self.members
            .iter()
            .map(Constructor::syntax)
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// Whether `kind` is one of the member kinds.
    pub fn contains(&self, kind: Kind) -> bool {
        self.members.iter().any(|member| member.kind() == kind)
    }

    /// Whether `value` was built by one of the member kinds.
    pub fn is_instance(&self, value: &Value) -> bool {
        self.contains(value.kind())
    }

    /// Try each member in order and return the first success.
    ///
    /// Every rejection, including a member's configuration fault, is collected
    /// into [`StringableError::NoMatch`] once all members have been tried.
    pub fn construct(&self, raw: impl Into<Input>) -> Result<MultiValue> {
        let raw = raw.into();
        if self.members.is_empty() {
            return Err(StringableError::Configuration(
                "Multitype has no member types".to_string(),
            ));
        }

        let mut errors = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match member.construct(raw.clone()) {
                Ok(value) => {
                    tracing::debug!(input = %raw, kind = %member.kind(), "multitype member matched");
                    return Ok(MultiValue {
                        value,
                        typename: self.typename(),
                        syntax: self.syntax(),
                    });
                }
                Err(err) if err.is_configuration() => {
                    tracing::warn!(kind = %member.kind(), error = %err, "multitype member is misconfigured");
                    errors.push(err);
                }
                Err(err) => {
                    tracing::debug!(input = %raw, kind = %member.kind(), error = %err, "multitype member rejected input");
                    errors.push(err);
                }
            }
        }
        Err(StringableError::NoMatch(errors))
    }
}

/// A value produced by a [`Multitype`].
///
/// Renders like the matched member but reports the multitype's typename and
/// syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiValue {
    value: Value,
    typename: String,
    syntax: String,
}

impl MultiValue {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Kind of the member that accepted the input.
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.value.kind() == kind
    }

    /// A new value from `raw`, built by the member that matched this one.
    pub fn rebuild(&self, raw: impl Into<Input>) -> Result<MultiValue> {
        Ok(MultiValue {
            value: self.value.rebuild(raw)?,
            typename: self.typename.clone(),
            syntax: self.syntax.clone(),
        })
    }

    pub fn typename(&self) -> &str {
        &self.typename
    }

    pub fn syntax(&self) -> &str {
        &self.syntax
    }
}

impl fmt::Display for MultiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
