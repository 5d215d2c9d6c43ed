//! Boundary checks shared by the formulas.
//!
//! Each check returns the value unchanged on success so call sites can bind
//! validated inputs directly:
//!
//! ```rust
//! use fincalc::validation::require_non_negative;
//!
//! let principal = require_non_negative("principal", 1000.0).unwrap();
//! assert_eq!(principal, 1000.0);
//! assert!(require_non_negative("principal", -1.0).is_err());
//! ```

use crate::error::{FinanceError, FinanceResult};

fn reject<T>(parameter: &str, reason: String) -> FinanceResult<T> {
    log::debug!("rejected {parameter}: {reason}");
    Err(FinanceError::invalid_argument(parameter, reason))
}

/// Requires a finite number (not NaN or infinite).
pub fn require_finite(parameter: &str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        reject(parameter, format!("must be a finite number, got {value}"))
    }
}

/// Requires a finite number `>= 0`.
pub fn require_non_negative(parameter: &str, value: f64) -> FinanceResult<f64> {
    let value = require_finite(parameter, value)?;
    if value < 0.0 {
        return reject(parameter, format!("must be non-negative, got {value}"));
    }
    Ok(value)
}

/// Requires a finite number `> 0`.
pub fn require_positive(parameter: &str, value: f64) -> FinanceResult<f64> {
    let value = require_finite(parameter, value)?;
    if value <= 0.0 {
        return reject(parameter, format!("must be positive, got {value}"));
    }
    Ok(value)
}

/// Requires a computed result to be finite.
///
/// Inputs can each pass their own checks and still overflow `f64` together,
/// or drive a divisor to exactly zero. `inputs` names the parameters that
/// produced the value.
pub fn require_finite_result(inputs: &str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        reject(
            inputs,
            format!("result is not finite ({value}): overflow or zero divisor"),
        )
    }
}

/// Requires a count of at least one.
pub fn require_nonzero_count(parameter: &str, value: u32) -> FinanceResult<u32> {
    if value == 0 {
        return reject(parameter, "must be at least 1, got 0".to_string());
    }
    Ok(value)
}

/// Requires a non-empty slice.
pub fn require_non_empty<'a, T>(parameter: &str, values: &'a [T]) -> FinanceResult<&'a [T]> {
    if values.is_empty() {
        return reject(parameter, "must be a non-empty sequence".to_string());
    }
    Ok(values)
}
