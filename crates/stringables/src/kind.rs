//! Type-erased kinds: a tag per kind, a value union, and a serializable
//! constructor.
//!
//! A settings registry declares kinds as data, e.g.
//!
//! ```
//! use stringables::{Constructor, Kind};
//!
//! let ctor = Constructor::from_json(r#"{"type": "integer", "min": 0, "unit": "B"}"#).unwrap();
//! assert_eq!(ctor.kind(), Kind::Integer);
//!
//! let value = ctor.construct("10KiB").unwrap();
//! assert_eq!(value.kind(), Kind::Integer);
//! assert_eq!(value.to_string(), "10KiB");
//! ```

use crate::boolean::{BoolOptions, BoolValue};
use crate::choice::{Choice, ChoiceOptions};
use crate::error::Result;
use crate::number::{Number, NumberKind, NumberOptions};
use crate::path::{PathOptions, PathValue};
use crate::string::{StringOptions, StringValue};
use crate::tuple::{TupleOptions, TupleValue};
use crate::value::{Input, Partial, Stringable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying which kind produced a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Bool,
    Path,
    #[serde(rename = "option")]
    Choice,
    Tuple,
    Integer,
    Float,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Path => "path",
            Kind::Choice => "option",
            Kind::Tuple => "tuple",
            Kind::Integer => "integer",
            Kind::Float => "float",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constructed value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(StringValue),
    Bool(BoolValue),
    Path(PathValue),
    Choice(Choice),
    Tuple(TupleValue),
    Number(Number),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Path(_) => Kind::Path,
            Value::Choice(_) => Kind::Choice,
            Value::Tuple(_) => Kind::Tuple,
            Value::Number(n) if n.is_integer() => Kind::Integer,
            Value::Number(_) => Kind::Float,
        }
    }

    pub fn typename(&self) -> &'static str {
        match self {
            Value::String(v) => v.typename(),
            Value::Bool(v) => v.typename(),
            Value::Path(v) => v.typename(),
            Value::Choice(v) => v.typename(),
            Value::Tuple(v) => v.typename(),
            Value::Number(v) => v.typename(),
        }
    }

    pub fn syntax(&self) -> String {
        match self {
            Value::String(v) => v.syntax(),
            Value::Bool(v) => v.syntax(),
            Value::Path(v) => v.syntax(),
            Value::Choice(v) => v.syntax(),
            Value::Tuple(v) => v.syntax(),
            Value::Number(v) => v.syntax(),
        }
    }

    pub fn to_input(&self) -> Input {
        match self {
            Value::String(v) => v.to_input(),
            Value::Bool(v) => v.to_input(),
            Value::Path(v) => v.to_input(),
            Value::Choice(v) => v.to_input(),
            Value::Tuple(v) => v.to_input(),
            Value::Number(v) => v.to_input(),
        }
    }

    /// A new value of the same kind built from `raw` under this value's
    /// options.
    pub fn rebuild(&self, raw: impl Into<Input>) -> Result<Value> {
        Ok(match self {
            Value::String(v) => Value::String(v.rebuild(raw)?),
            Value::Bool(v) => Value::Bool(v.rebuild(raw)?),
            Value::Path(v) => Value::Path(v.rebuild(raw)?),
            Value::Choice(v) => Value::Choice(v.rebuild(raw)?),
            Value::Tuple(v) => Value::Tuple(v.rebuild(raw)?),
            Value::Number(v) => Value::Number(v.rebuild(raw)?),
        })
    }

    /// The constructor this value's options describe. Edit its options and
    /// call [`Constructor::construct`] to copy with overrides.
    pub fn constructor(&self) -> Constructor {
        match self {
            Value::String(v) => Constructor::String(v.options().clone()),
            Value::Bool(v) => Constructor::Bool(v.options().clone()),
            Value::Path(v) => Constructor::Path(v.options().clone()),
            Value::Choice(v) => Constructor::Choice(v.options().clone()),
            Value::Tuple(v) => Constructor::Tuple(v.options().clone()),
            Value::Number(v) => match v.options().kind {
                NumberKind::Integer => Constructor::Integer(v.options().clone()),
                NumberKind::Float => Constructor::Float(v.options().clone()),
            },
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&BoolValue> {
        match self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => fmt::Display::fmt(v, f),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Path(v) => fmt::Display::fmt(v, f),
            Value::Choice(v) => fmt::Display::fmt(v, f),
            Value::Tuple(v) => fmt::Display::fmt(v, f),
            Value::Number(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// A kind with its options bound, erased into one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Constructor {
    String(StringOptions),
    Bool(BoolOptions),
    Path(PathOptions),
    #[serde(rename = "option")]
    Choice(ChoiceOptions),
    Tuple(TupleOptions),
    Integer(NumberOptions),
    Float(NumberOptions),
}

impl Constructor {
    /// Read a kind declaration such as `{"type": "option", "options": ["a", "b"]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The default-option constructor for `kind`.
    pub fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::String => Constructor::String(StringOptions::default()),
            Kind::Bool => Constructor::Bool(BoolOptions::default()),
            Kind::Path => Constructor::Path(PathOptions::default()),
            Kind::Choice => Constructor::Choice(ChoiceOptions::default()),
            Kind::Tuple => Constructor::Tuple(TupleOptions::default()),
            Kind::Integer => Constructor::Integer(NumberOptions::integer()),
            Kind::Float => Constructor::Float(NumberOptions::float()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Constructor::String(_) => Kind::String,
            Constructor::Bool(_) => Kind::Bool,
            Constructor::Path(_) => Kind::Path,
            Constructor::Choice(_) => Kind::Choice,
            Constructor::Tuple(_) => Kind::Tuple,
            Constructor::Integer(_) => Kind::Integer,
            Constructor::Float(_) => Kind::Float,
        }
    }

    pub fn typename(&self) -> &'static str {
        match self {
            Constructor::String(_) => StringValue::TYPENAME,
            Constructor::Bool(_) => BoolValue::TYPENAME,
            Constructor::Path(_) => PathValue::TYPENAME,
            Constructor::Choice(_) => Choice::TYPENAME,
            Constructor::Tuple(_) => TupleValue::TYPENAME,
            Constructor::Integer(_) | Constructor::Float(_) => Number::TYPENAME,
        }
    }

    pub fn syntax(&self) -> String {
        match self {
            Constructor::String(o) => StringValue::syntax_for(o),
            Constructor::Bool(o) => BoolValue::syntax_for(o),
            Constructor::Path(o) => PathValue::syntax_for(o),
            Constructor::Choice(o) => Choice::syntax_for(o),
            Constructor::Tuple(o) => TupleValue::syntax_for(o),
            Constructor::Integer(o) | Constructor::Float(o) => Number::syntax_for(o),
        }
    }

    pub fn construct(&self, raw: impl Into<Input>) -> Result<Value> {
        let raw = raw.into();
        Ok(match self {
            Constructor::String(o) => Value::String(StringValue::new(raw, o.clone())?),
            Constructor::Bool(o) => Value::Bool(BoolValue::new(raw, o.clone())?),
            Constructor::Path(o) => Value::Path(PathValue::new(raw, o.clone())?),
            Constructor::Choice(o) => Value::Choice(Choice::new(raw, o.clone())?),
            Constructor::Tuple(o) => Value::Tuple(TupleValue::new(raw, o.clone())?),
            Constructor::Integer(o) => Value::Number(Number::integer(raw, o.clone())?),
            Constructor::Float(o) => Value::Number(Number::float(raw, o.clone())?),
        })
    }
}

impl From<Partial<StringValue>> for Constructor {
    fn from(p: Partial<StringValue>) -> Self {
        Constructor::String(p.options().clone())
    }
}

impl From<Partial<BoolValue>> for Constructor {
    fn from(p: Partial<BoolValue>) -> Self {
        Constructor::Bool(p.options().clone())
    }
}

impl From<Partial<PathValue>> for Constructor {
    fn from(p: Partial<PathValue>) -> Self {
        Constructor::Path(p.options().clone())
    }
}

impl From<Partial<Choice>> for Constructor {
    fn from(p: Partial<Choice>) -> Self {
        Constructor::Choice(p.options().clone())
    }
}

impl From<Partial<TupleValue>> for Constructor {
    fn from(p: Partial<TupleValue>) -> Self {
        Constructor::Tuple(p.options().clone())
    }
}

impl From<Partial<Number>> for Constructor {
    fn from(p: Partial<Number>) -> Self {
        let options = p.options().clone();
        match options.kind {
            NumberKind::Integer => Constructor::Integer(options),
            NumberKind::Float => Constructor::Float(options),
        }
    }
}
