//! Plain addition and subtraction kept for existing callers.
//!
//! Operands are [`Number`]s so integer inputs stay integers. Results are not
//! rounded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::validation::require_finite;

/// An integer or real operand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer value, bounded to the `i64` range.
    Int(i64),
    /// Real value.
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns true for an integer value.
    #[must_use]
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    fn checked(self, parameter: &str) -> FinanceResult<Self> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Float(f) => require_finite(parameter, f).map(Self::Float),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

fn combine(
    x: Number,
    y: Number,
    op: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> FinanceResult<Number> {
    let x = x.checked("x")?;
    let y = y.checked("y")?;

    match (x, y) {
        (Number::Int(a), Number::Int(b)) => int_op(a, b).map(Number::Int).ok_or_else(|| {
            log::debug!("integer overflow in {a} {op} {b}");
            FinanceError::invalid_argument("x", format!("{a} {op} {b} overflows a 64-bit integer"))
        }),
        _ => Ok(Number::Float(float_op(x.as_f64(), y.as_f64()))),
    }
}

/// Adds two numbers.
///
/// Two integers give an integer; anything else gives a real. Integer results
/// are bounded to `i64`: a sum outside that range fails with
/// [`FinanceError::InvalidArgument`] instead of wrapping. Pass a
/// [`Number::Float`] operand to trade exactness for range.
///
/// ```rust
/// use fincalc::{add_numbers, Number};
///
/// assert_eq!(add_numbers(5, 3).unwrap(), Number::Int(8));
/// assert_eq!(add_numbers(2.5, 1).unwrap(), Number::Float(3.5));
/// ```
pub fn add_numbers(x: impl Into<Number>, y: impl Into<Number>) -> FinanceResult<Number> {
    combine(x.into(), y.into(), "+", i64::checked_add, |a, b| a + b)
}

/// Subtracts `y` from `x`.
///
/// Two integers give an integer; anything else gives a real. As with
/// [`add_numbers`], an integer difference outside `i64` is rejected.
pub fn subtract_numbers(x: impl Into<Number>, y: impl Into<Number>) -> FinanceResult<Number> {
    combine(x.into(), y.into(), "-", i64::checked_sub, |a, b| a - b)
}
