//! # stringables
//!
//! Self-validating, self-describing value kinds for settings that users type
//! in as text.
//!
//! Every kind parses human input, validates it against its options, renders
//! back to a canonical string, and can describe its own syntax for help text.
//! Numbers understand units and binary/metric prefixes (`10Mi`, `2.5kB`) and
//! relative adjustments (`+=5`), and several kinds can be combined into a
//! [`Multitype`] that accepts whichever member fits.
//!
//! ## Quick start
//!
//! ```rust
//! use stringables::{Number, NumberOptions, PrefixMode, Stringable};
//!
//! let limit = Number::new("10MiB", NumberOptions::default()).unwrap();
//! assert_eq!(limit, 10.0 * 1024.0 * 1024.0);
//! assert_eq!(limit.prefix(), PrefixMode::Binary);
//! assert_eq!(limit.to_string(), "10MiB");
//!
//! let bits = Number::new("10MiB", NumberOptions::default().convert_to("b")).unwrap();
//! assert_eq!(bits.to_string(), "80Mib");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Input` and the `Stringable` contract shared by every kind
//! - [`string`], [`boolean`], [`path`], [`choice`], [`tuple`] — scalar kinds
//! - [`number`] — integers and floats with units and prefixes
//! - [`arith`] — unit-preserving arithmetic and `+=`/`-=` adjustments
//! - [`kind`] — kind tags, the `Value` union, and serializable constructors
//! - [`multitype`] — unions of several kinds
//! - [`pretty`] — compact float rendering
//! - [`alias`] — alias tables
//! - [`error`] — error types

pub mod alias;
pub mod arith;
pub mod boolean;
pub mod choice;
pub mod error;
pub mod kind;
pub mod multitype;
pub mod number;
pub mod path;
pub mod pretty;
pub mod string;
pub mod tuple;
pub mod value;

pub use alias::{resolve_alias, Aliases};
pub use arith::{parse_arithmetic_operator, Adjustment, Operand};
pub use boolean::{BoolOptions, BoolValue};
pub use choice::{Choice, ChoiceOptions};
pub use error::{Result, StringableError};
pub use kind::{Constructor, Kind, Value};
pub use multitype::{MultiValue, Multitype};
pub use number::{Number, NumberKind, NumberOptions, PrefixMode};
pub use path::{PathOptions, PathValue};
pub use pretty::pretty_float;
pub use string::{StringOptions, StringValue};
pub use tuple::{TupleOptions, TupleValue};
pub use value::{Input, Partial, Stringable};
