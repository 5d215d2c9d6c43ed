//! Rounding applied at the boundary of every formula.
//!
//! Results are computed in `f64` and rounded once, just before they are
//! returned. Rounding goes through [`Decimal`] so the midpoint rule applies to
//! the decimal expansion of the stored binary value rather than to a scaled
//! (and already perturbed) `f64`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places results are reported to by default.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// How midpoints are resolved when rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoints go to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Midpoints go away from zero.
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// Rounds `value` to `decimal_places` using `mode`.
///
/// Values outside the range of [`Decimal`] are rounded in `f64`. Negative
/// zero is normalised to `0.0`.
#[must_use]
pub fn round_to(value: f64, decimal_places: u32, mode: RoundingMode) -> f64 {
    let rounded = match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(decimal_places, mode.strategy())
            .to_f64()
            .unwrap_or_else(|| round_scaled(value, decimal_places, mode)),
        None => round_scaled(value, decimal_places, mode),
    };

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds to [`DEFAULT_DECIMAL_PLACES`] with [`RoundingMode::HalfEven`].
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    round_to(value, DEFAULT_DECIMAL_PLACES, RoundingMode::HalfEven)
}

fn round_scaled(value: f64, decimal_places: u32, mode: RoundingMode) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    // Past 2^52 every f64 is already an integer at this scale.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    let rounded = match mode {
        RoundingMode::HalfEven => scaled.round_ties_even(),
        RoundingMode::HalfAwayFromZero => scaled.round(),
    };
    rounded / factor
}
