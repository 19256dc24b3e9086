//! The contract shared by every value kind.
//!
//! A kind turns raw [`Input`] into an immutable value in three steps:
//!
//! 1. [`Stringable::convert`] normalizes the input into the kind's payload
//!    (string → number, `~` expansion, alias resolution, ...).
//! 2. [`Stringable::validate`] checks the payload against the kind's options.
//! 3. [`Stringable::assemble`] stores payload and options in a new value.
//!
//! [`Stringable::new`] runs all three. A value renders back to text through
//! `Display`, and that text reparses to an equal value under the same options.

use crate::error::Result;
use std::fmt;

/// Raw input accepted by every kind's constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Input>),
}

impl Input {
    /// The input as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => f.write_str(s),
            Input::Number(n) => write!(f, "{n}"),
            Input::Bool(b) => write!(f, "{b}"),
            Input::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Text(s.clone())
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        Input::Number(n)
    }
}

impl From<i64> for Input {
    fn from(n: i64) -> Self {
        Input::Number(n as f64)
    }
}

impl From<i32> for Input {
    fn from(n: i32) -> Self {
        Input::Number(f64::from(n))
    }
}

impl From<u64> for Input {
    fn from(n: u64) -> Self {
        Input::Number(n as f64)
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::List(items.into_iter().map(Into::into).collect())
    }
}

/// A self-validating value kind that parses from and renders to text.
pub trait Stringable: Clone + fmt::Display + Sized {
    /// Construction options, e.g. length bounds or an allowed set.
    type Options: Clone + Default + fmt::Debug + PartialEq;
    /// Normalized form produced by [`Stringable::convert`].
    type Payload: Clone + fmt::Debug + PartialEq;

    /// Human label used in help and error text.
    const TYPENAME: &'static str;

    /// Normalize raw input. Must be idempotent on its own output.
    fn convert(raw: Input, options: &Self::Options) -> Result<Self::Payload>;

    /// Check a converted payload against the options.
    fn validate(payload: &Self::Payload, options: &Self::Options) -> Result<()>;

    /// Store a validated payload.
    fn assemble(payload: Self::Payload, options: Self::Options) -> Self;

    /// Grammar description for the given options; no instance required.
    fn syntax_for(options: &Self::Options) -> String;

    /// Options this value was constructed with.
    fn options(&self) -> &Self::Options;

    /// Normalized payload of this value.
    fn payload(&self) -> Self::Payload;

    /// The payload as raw input, suitable for reconstruction.
    fn to_input(&self) -> Input;

    /// Convert, validate, and store `raw`.
    fn new(raw: impl Into<Input>, options: Self::Options) -> Result<Self> {
        let payload = Self::convert(raw.into(), &options)?;
        Self::validate(&payload, &options)?;
        Ok(Self::assemble(payload, options))
    }

    /// Construct from text with default options.
    fn parse(s: &str) -> Result<Self> {
        Self::new(s, Self::Options::default())
    }

    fn typename(&self) -> &'static str {
        Self::TYPENAME
    }

    fn syntax(&self) -> String {
        Self::syntax_for(self.options())
    }

    /// Build a new value from `raw` with this value's options, adjusted by
    /// `update`. The original is left untouched.
    fn copy(&self, raw: impl Into<Input>, update: impl FnOnce(&mut Self::Options)) -> Result<Self> {
        let mut options = self.options().clone();
        update(&mut options);
        Self::new(raw, options)
    }

    /// Rebuild this value with some options overridden.
    ///
    /// The copy is validated against the new options.
    fn copy_with(&self, update: impl FnOnce(&mut Self::Options)) -> Result<Self> {
        self.copy(self.to_input(), update)
    }

    /// Build a new value from `raw` using this value's options.
    fn rebuild(&self, raw: impl Into<Input>) -> Result<Self> {
        self.copy(raw, |_| {})
    }

    /// Bind `options` once and construct many values from it later.
    fn partial(options: Self::Options) -> Partial<Self> {
        Partial { options }
    }
}

/// A kind with its options bound, ready to construct values.
#[derive(Debug, Clone, PartialEq)]
pub struct Partial<T: Stringable> {
    options: T::Options,
}

impl<T: Stringable> Partial<T> {
    pub fn call(&self, raw: impl Into<Input>) -> Result<T> {
        T::new(raw, self.options.clone())
    }

    pub fn options(&self) -> &T::Options {
        &self.options
    }

    pub fn syntax(&self) -> String {
        T::syntax_for(&self.options)
    }

    pub fn typename(&self) -> &'static str {
        T::TYPENAME
    }
}

impl<T: Stringable> Default for Partial<T> {
    fn default() -> Self {
        Self {
            options: T::Options::default(),
        }
    }
}
