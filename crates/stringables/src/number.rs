//! Integers and floats with units and binary/metric prefixes.
//!
//! # Grammar
//!
//! ```text
//! [+|-](<digits>|<digits>.<digits>|.<digits>|inf|∞)[ ][Ti|T|Gi|G|Mi|M|Ki|k][<unit>]
//! ```
//!
//! Matching is case-insensitive. Binary prefixes (`Ki`, `Mi`, ...) scale by
//! powers of 1024 and switch the value to [`PrefixMode::Binary`]; metric
//! prefixes (`k`, `M`, ...) scale by powers of 1000 and switch it to
//! [`PrefixMode::Metric`]. The unit is whatever trailing text remains, as long
//! as it contains no digits or whitespace, and it overrides a declared unit.
//!
//! # Rendering
//!
//! A value is displayed with the largest prefix of its ladder that fits,
//! formatted by [`pretty_float`], so `1000³` in binary mode renders as
//! `954Mi`. The rendering keeps at most two significant fractional digits,
//! which means reparsing it can land on a slightly different magnitude.

use crate::error::{Result, StringableError};
use crate::pretty::pretty_float;
use crate::value::{Input, Stringable};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const BINARY_PREFIXES: [(&str, f64); 4] = [
    ("Ti", 1_099_511_627_776.0),
    ("Gi", 1_073_741_824.0),
    ("Mi", 1_048_576.0),
    ("Ki", 1024.0),
];

const METRIC_PREFIXES: [(&str, f64); 4] = [
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
];

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([-+]?(?:[0-9]+\.[0-9]+|[0-9]+|\.[0-9]+|inf|∞)) ?(Ti|T|Gi|G|Mi|M|Ki|k|)([^\s0-9]*?)$")
        .expect("number grammar is a valid regex")
});

/// Unit conversions: `(from, to, converter)`.
const CONVERTERS: [(&str, &str, fn(f64) -> f64); 2] =
    [("B", "b", bytes_to_bits), ("b", "B", bits_to_bytes)];

fn bytes_to_bits(value: f64) -> f64 {
    value * 8.0
}

fn bits_to_bytes(value: f64) -> f64 {
    value / 8.0
}

fn converter(from: &str, to: &str) -> Option<fn(f64) -> f64> {
    CONVERTERS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, convert)| *convert)
}

/// Whether a number is stored rounded to whole values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    #[default]
    Float,
}

/// Which prefix ladder a number is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// `Ki`, `Mi`, `Gi`, `Ti` (powers of 1024).
    Binary,
    /// `k`, `M`, `G`, `T` (powers of 1000).
    #[default]
    Metric,
    /// No prefix is ever rendered.
    #[serde(rename = "none")]
    Plain,
}

impl PrefixMode {
    fn ladder(self) -> &'static [(&'static str, f64)] {
        match self {
            PrefixMode::Binary => &BINARY_PREFIXES,
            PrefixMode::Metric => &METRIC_PREFIXES,
            PrefixMode::Plain => &[],
        }
    }
}

impl FromStr for PrefixMode {
    type Err = StringableError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "binary" => Ok(PrefixMode::Binary),
            "metric" => Ok(PrefixMode::Metric),
            "none" => Ok(PrefixMode::Plain),
            other => Err(StringableError::Configuration(format!(
                "prefix must be 'binary', 'metric' or 'none', not '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrefixMode::Binary => "binary",
            PrefixMode::Metric => "metric",
            PrefixMode::Plain => "none",
        })
    }
}

/// Options for [`Number`].
///
/// `prefix` and `hide_unit` are optional so that values built from another
/// [`Number`] can inherit them. After construction they are always resolved,
/// and `convert_to` has been folded into `unit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOptions {
    /// Chosen by the constructor (`Number::integer`, `"type": "integer"`).
    #[serde(skip)]
    pub kind: NumberKind,
    pub unit: Option<String>,
    /// Convert the parsed value into this unit.
    pub convert_to: Option<String>,
    pub prefix: Option<PrefixMode>,
    /// Render without the unit by default.
    pub hide_unit: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Clamp out-of-bounds values instead of rejecting them.
    pub autolimit: bool,
}

impl NumberOptions {
    pub fn integer() -> Self {
        Self {
            kind: NumberKind::Integer,
            ..Self::default()
        }
    }

    pub fn float() -> Self {
        Self::default()
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn convert_to(mut self, unit: impl Into<String>) -> Self {
        self.convert_to = Some(unit.into());
        self
    }

    pub fn prefix(mut self, prefix: PrefixMode) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn hide_unit(mut self, hide: bool) -> Self {
        self.hide_unit = Some(hide);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn autolimit(mut self, autolimit: bool) -> Self {
        self.autolimit = autolimit;
        self
    }
}

/// Converted magnitude with the unit and prefix mode it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    pub value: f64,
    pub unit: Option<String>,
    pub prefix: PrefixMode,
}

/// An integer or float with unit and prefix metadata.
///
/// Equality and ordering compare magnitudes only, like plain numbers.
#[derive(Debug, Clone)]
pub struct Number {
    value: f64,
    options: NumberOptions,
}

impl Number {
    /// Construct an integer; the magnitude is rounded half to even.
    pub fn integer(raw: impl Into<Input>, options: NumberOptions) -> Result<Self> {
        Self::new(
            raw,
            NumberOptions {
                kind: NumberKind::Integer,
                ..options
            },
        )
    }

    pub fn float(raw: impl Into<Input>, options: NumberOptions) -> Result<Self> {
        Self::new(
            raw,
            NumberOptions {
                kind: NumberKind::Float,
                ..options
            },
        )
    }

    /// Construct from another number, inheriting its unit, prefix mode and
    /// `hide_unit` unless `overrides` sets them.
    pub fn from_number(source: &Number, overrides: NumberOptions) -> Result<Self> {
        let options = NumberOptions {
            unit: overrides.unit.or_else(|| source.options.unit.clone()),
            prefix: overrides.prefix.or(source.options.prefix),
            hide_unit: overrides.hide_unit.or(source.options.hide_unit),
            ..overrides
        };
        Self::new(source.value, options)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> NumberKind {
        self.options.kind
    }

    pub fn is_integer(&self) -> bool {
        self.options.kind == NumberKind::Integer
    }

    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    pub fn unit(&self) -> Option<&str> {
        self.options.unit.as_deref()
    }

    pub fn prefix(&self) -> PrefixMode {
        self.options.prefix.unwrap_or_default()
    }

    pub fn hide_unit(&self) -> bool {
        self.options.hide_unit.unwrap_or(false)
    }

    pub fn min(&self) -> Option<f64> {
        self.options.min
    }

    pub fn max(&self) -> Option<f64> {
        self.options.max
    }

    pub fn autolimit(&self) -> bool {
        self.options.autolimit
    }

    /// Rendering including the unit, e.g. `1kB`.
    pub fn with_unit(&self) -> String {
        let mut s = self.without_unit();
        if let Some(unit) = &self.options.unit {
            s.push_str(unit);
        }
        s
    }

    /// Rendering excluding the unit, e.g. `1k`.
    pub fn without_unit(&self) -> String {
        let value = self.value;
        if value == 0.0 {
            return "0".to_string();
        }
        let absolute = value.abs();
        if absolute.is_infinite() {
            return pretty_float(value);
        }
        for (prefix, size) in self.prefix().ladder() {
            if absolute >= *size {
                return format!("{}{prefix}", pretty_float(value / size));
            }
        }
        pretty_float(value)
    }
}

fn parse_magnitude(text: &str) -> Option<f64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if digits == "∞" || digits.eq_ignore_ascii_case("inf") {
        f64::INFINITY
    } else {
        digits.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn prefix_scale(prefix: &str) -> f64 {
    BINARY_PREFIXES
        .iter()
        .chain(METRIC_PREFIXES.iter())
        .find(|(p, _)| p.eq_ignore_ascii_case(prefix))
        .map_or(1.0, |(_, size)| *size)
}

/// Format a bound or magnitude for error messages.
fn plain(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        pretty_float(n)
    }
}

impl Stringable for Number {
    type Options = NumberOptions;
    type Payload = Magnitude;

    const TYPENAME: &'static str = "number";

    fn convert(raw: Input, options: &NumberOptions) -> Result<Magnitude> {
        let mut prefix = options.prefix.unwrap_or_default();
        let mut unit = options.unit.clone();

        let mut value = match raw {
            Input::Number(n) if !n.is_nan() => n,
            Input::Text(text) => {
                let trimmed = text.trim();
                let caps = NUMBER_RE
                    .captures(trimmed)
                    .ok_or_else(|| StringableError::invalid(&text, "Not a number"))?;
                let mut value = parse_magnitude(&caps[1])
                    .ok_or_else(|| StringableError::invalid(&text, "Not a number"))?;

                let prfx = &caps[2];
                value *= prefix_scale(prfx);
                match prfx.len() {
                    2 => prefix = PrefixMode::Binary,
                    1 => prefix = PrefixMode::Metric,
                    _ => {}
                }
                if !caps[3].is_empty() {
                    unit = Some(caps[3].to_string());
                }
                tracing::trace!(input = %text, value, ?unit, %prefix, "parsed number");
                value
            }
            other => return Err(StringableError::invalid(other, "Not a number")),
        };

        if let Some(target) = &options.convert_to {
            match unit.as_deref() {
                Some(current) if current == target => {}
                None => unit = Some(target.clone()),
                Some(current) => {
                    let convert = converter(current, target).ok_or_else(|| {
                        StringableError::UnitConversion {
                            from: current.to_string(),
                            to: target.clone(),
                        }
                    })?;
                    value = convert(value);
                    unit = Some(target.clone());
                }
            }
        }

        if options.kind == NumberKind::Integer && value.is_finite() {
            value = value.round_ties_even();
        }

        if options.autolimit {
            match (options.min, options.max) {
                (Some(min), _) if value < min => value = min,
                (_, Some(max)) if value > max => value = max,
                _ => {}
            }
        }

        Ok(Magnitude {
            value,
            unit,
            prefix,
        })
    }

    fn validate(magnitude: &Magnitude, options: &NumberOptions) -> Result<()> {
        let value = magnitude.value;
        if let Some(min) = options.min {
            if value < min {
                return Err(StringableError::invalid(
                    plain(value),
                    format!("Too small (minimum is {})", plain(min)),
                ));
            }
        }
        if let Some(max) = options.max {
            if value > max {
                return Err(StringableError::invalid(
                    plain(value),
                    format!("Too big (maximum is {})", plain(max)),
                ));
            }
        }
        Ok(())
    }

    fn assemble(magnitude: Magnitude, options: NumberOptions) -> Self {
        let options = NumberOptions {
            unit: magnitude.unit,
            convert_to: None,
            prefix: Some(magnitude.prefix),
            hide_unit: Some(options.hide_unit.unwrap_or(false)),
            ..options
        };
        Self {
            value: magnitude.value,
            options,
        }
    }

    fn syntax_for(options: &NumberOptions) -> String {
        let prefixes: Vec<&str> = BINARY_PREFIXES
            .iter()
            .chain(METRIC_PREFIXES.iter())
            .map(|(p, _)| *p)
            .collect();
        let mut syntax = format!("<NUMBER>[{}]", prefixes.join("|"));
        if let Some(unit) = &options.unit {
            syntax.push_str(&format!("[{unit}]"));
        }
        syntax
    }

    fn options(&self) -> &NumberOptions {
        &self.options
    }

    fn payload(&self) -> Magnitude {
        Magnitude {
            value: self.value,
            unit: self.options.unit.clone(),
            prefix: self.prefix(),
        }
    }

    fn to_input(&self) -> Input {
        Input::Number(self.value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hide_unit() {
            f.write_str(&self.without_unit())
        } else {
            f.write_str(&self.with_unit())
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other as f64
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl PartialOrd<f64> for Number {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl From<&Number> for f64 {
    fn from(n: &Number) -> Self {
        n.value
    }
}
