//! Arithmetic on [`Number`]s that keeps units and prefixes intact.
//!
//! Every operation reconciles units first: a right-hand [`Number`] with a
//! different unit is converted into the left operand's unit, and the
//! operation fails if no converter exists. The result is a new number that
//! copies the left operand's unit, prefix mode, `hide_unit`, bounds and
//! `autolimit`. It is an integer when the numeric result is whole and finite,
//! otherwise a float.
//!
//! An infinite operand is absorbing: an infinite left operand comes back
//! unchanged, and an operation that would yield NaN against an infinite right
//! operand yields that operand instead.
//!
//! ```
//! use stringables::{arith, Number, NumberOptions, Stringable};
//!
//! let n = Number::new(5, NumberOptions::default().unit("X")).unwrap();
//! let share = arith::div(&n, 100).unwrap();
//! assert_eq!(share, 0.05);
//! assert_eq!(share.unit(), Some("X"));
//! ```

use crate::error::{Result, StringableError};
use crate::number::{Number, NumberKind, NumberOptions};
use crate::value::{Input, Stringable};

/// Right-hand side of an arithmetic operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Number(&'a Number),
}

impl From<f64> for Operand<'_> {
    fn from(n: f64) -> Self {
        Operand::Scalar(n)
    }
}

impl From<i64> for Operand<'_> {
    fn from(n: i64) -> Self {
        Operand::Scalar(n as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(n: i32) -> Self {
        Operand::Scalar(f64::from(n))
    }
}

impl<'a> From<&'a Number> for Operand<'a> {
    fn from(n: &'a Number) -> Self {
        Operand::Number(n)
    }
}

/// Magnitude of `rhs` expressed in the unit of `lhs`.
fn reconcile(lhs: &Number, rhs: Operand<'_>) -> Result<f64> {
    match rhs {
        Operand::Scalar(n) => Ok(n),
        Operand::Number(other) => match lhs.unit() {
            Some(unit) if other.unit() != Some(unit) => {
                let converted = Number::from_number(
                    other,
                    NumberOptions {
                        kind: NumberKind::Float,
                        ..NumberOptions::default()
                    }
                    .convert_to(unit),
                )?;
                Ok(converted.value())
            }
            _ => Ok(other.value()),
        },
    }
}

/// Wrap `result` in a new number carrying the metadata of `lhs`.
fn finish(lhs: &Number, result: f64) -> Result<Number> {
    let kind = if result.is_finite() && result.fract() == 0.0 {
        NumberKind::Integer
    } else {
        NumberKind::Float
    };
    let options = NumberOptions {
        kind,
        convert_to: None,
        ..lhs.options().clone()
    };
    Number::new(result, options)
}

fn binary<'a>(
    lhs: &Number,
    rhs: impl Into<Operand<'a>>,
    op: impl FnOnce(f64, f64) -> Result<f64>,
) -> Result<Number> {
    let rhs = reconcile(lhs, rhs.into())?;
    if lhs.is_infinite() {
        return finish(lhs, lhs.value());
    }
    let result = op(lhs.value(), rhs)?;
    if result.is_nan() && rhs.is_infinite() {
        return finish(lhs, rhs);
    }
    finish(lhs, result)
}

fn unary(lhs: &Number, op: impl FnOnce(f64) -> f64) -> Result<Number> {
    if lhs.is_infinite() {
        return finish(lhs, lhs.value());
    }
    finish(lhs, op(lhs.value()))
}

/// A number in the unit and prefix mode of `like`, without bounds or autolimit.
fn unbounded(like: &Number, value: f64) -> Result<Number> {
    let options = like.options();
    Number::new(
        value,
        NumberOptions {
            kind: if value.is_finite() {
                options.kind
            } else {
                NumberKind::Float
            },
            unit: options.unit.clone(),
            prefix: options.prefix,
            hide_unit: options.hide_unit,
            ..NumberOptions::default()
        },
    )
}

fn nonzero(divisor: f64, what: &str) -> Result<()> {
    if divisor == 0.0 {
        return Err(StringableError::Arithmetic(format!("{what} by zero")));
    }
    Ok(())
}

/// Remainder with the sign of the divisor.
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

pub fn add<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| Ok(a + b))
}

pub fn sub<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| Ok(a - b))
}

pub fn mul<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| Ok(a * b))
}

/// True division.
pub fn div<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| {
        nonzero(b, "division")?;
        Ok(a / b)
    })
}

/// Division rounded towards negative infinity.
pub fn floordiv<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| {
        nonzero(b, "division")?;
        Ok((a / b).floor())
    })
}

/// Remainder of [`floordiv`]; takes the sign of the divisor.
pub fn modulo<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| {
        nonzero(b, "modulo")?;
        Ok(floored_rem(a, b))
    })
}

/// Quotient and remainder in one go.
pub fn divmod<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<(Number, Number)> {
    let rhs = rhs.into();
    Ok((floordiv(lhs, rhs)?, modulo(lhs, rhs)?))
}

pub fn pow<'a>(lhs: &Number, rhs: impl Into<Operand<'a>>) -> Result<Number> {
    binary(lhs, rhs, |a, b| {
        if a == 0.0 && b < 0.0 {
            return Err(StringableError::Arithmetic(
                "zero cannot be raised to a negative power".to_string(),
            ));
        }
        Ok(a.powf(b))
    })
}

pub fn floor(n: &Number) -> Result<Number> {
    unary(n, f64::floor)
}

pub fn ceil(n: &Number) -> Result<Number> {
    unary(n, f64::ceil)
}

/// Round half to even, to `ndigits` decimals or to a whole number.
pub fn round(n: &Number, ndigits: Option<i32>) -> Result<Number> {
    unary(n, |v| match ndigits {
        None => v.round_ties_even(),
        Some(digits) => {
            let scale = 10f64.powi(digits);
            (v * scale).round_ties_even() / scale
        }
    })
}

/// Outcome of [`parse_arithmetic_operator`].
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    /// `+=`/`-=` was applied to the current value.
    Applied(Number),
    /// The new value is absolute; hand it to the kind's own constructor.
    Passthrough(Input),
}

impl Adjustment {
    pub fn applied(&self) -> Option<&Number> {
        match self {
            Adjustment::Applied(n) => Some(n),
            Adjustment::Passthrough(_) => None,
        }
    }

    pub fn into_input(self) -> Input {
        match self {
            Adjustment::Applied(n) => n.to_input(),
            Adjustment::Passthrough(input) => input,
        }
    }
}

fn plain_decimal(text: &str) -> Result<f64> {
    let text = text.trim();
    let well_formed = !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().filter(|&c| c == '.').count() <= 1
        && text != ".";
    if !well_formed {
        return Err(StringableError::invalid(text, "Not a number"));
    }
    text.parse::<f64>()
        .map_err(|_| StringableError::invalid(text, "Not a number"))
}

/// Apply a relative adjustment (`+=N` or `-=N`) in `new` to `current`.
///
/// An infinite `current` is treated as zero. A `-=` that leaves nothing
/// positive yields `+∞`, the "unlimited" sentinel, which ignores the bounds
/// of `current`. Values that are not
/// adjustments are passed through untouched.
///
/// ```
/// use stringables::arith::parse_arithmetic_operator;
/// use stringables::{Number, NumberOptions};
///
/// let current = Number::integer(10, NumberOptions::default()).unwrap();
/// let adjusted = parse_arithmetic_operator(&current, "+=5").unwrap();
/// assert_eq!(adjusted.applied().unwrap().value(), 15.0);
/// ```
pub fn parse_arithmetic_operator(current: &Number, new: impl Into<Input>) -> Result<Adjustment> {
    let new = new.into();
    let text = new
        .as_text()
        .filter(|text| text.chars().count() >= 3)
        .map(|text| text.trim().to_string());
    let Some(text) = text else {
        return Ok(Adjustment::Passthrough(new));
    };

    let zero;
    let current = if current.is_infinite() {
        zero = unbounded(current, 0.0)?;
        &zero
    } else {
        current
    };

    if let Some(rest) = text.strip_prefix("+=") {
        let amount = plain_decimal(rest)?;
        return Ok(Adjustment::Applied(add(current, amount)?));
    }
    if let Some(rest) = text.strip_prefix("-=") {
        let amount = plain_decimal(rest)?;
        if current.value() - amount <= 0.0 {
            tracing::debug!(current = %current, amount, "adjustment underflow, unbounded");
            return Ok(Adjustment::Applied(unbounded(current, f64::INFINITY)?));
        }
        return Ok(Adjustment::Applied(sub(current, amount)?));
    }
    Ok(Adjustment::Passthrough(new))
}
