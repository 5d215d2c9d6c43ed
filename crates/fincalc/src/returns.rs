//! Annualized investment returns.

use crate::config::CalculatorConfig;
use crate::error::FinanceResult;
use crate::validation::{require_finite_result, require_positive};

/// Calculates the annualized return of an investment as a percentage.
///
/// `((final / initial)^(1 / years) − 1) × 100`, rounded to cents. Losses give
/// a negative result.
///
/// # Example
///
/// ```rust
/// use fincalc::investment_return;
///
/// // Doubling over two years is about 41.42% a year.
/// assert_eq!(investment_return(1000.0, 2000.0, 2.0).unwrap(), 41.42);
/// assert!(investment_return(1000.0, 800.0, 2.0).unwrap() < 0.0);
/// ```
pub fn investment_return(initial: f64, final_value: f64, years: f64) -> FinanceResult<f64> {
    let annualized = annualized_return(initial, final_value, years)?;
    Ok(CalculatorConfig::default().round(annualized))
}

/// Unrounded annualized return in percent.
pub(crate) fn annualized_return(initial: f64, final_value: f64, years: f64) -> FinanceResult<f64> {
    let initial = require_positive("initial", initial)?;
    let final_value = require_positive("final", final_value)?;
    let years = require_positive("years", years)?;

    let annualized = require_finite_result(
        "initial, final, years",
        ((final_value / initial).powf(1.0 / years) - 1.0) * 100.0,
    )?;
    log::trace!("annualized return: {annualized}% over {years} years");
    Ok(annualized)
}
