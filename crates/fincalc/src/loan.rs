//! Loan amortization.

use crate::config::CalculatorConfig;
use crate::error::FinanceResult;
use crate::validation::{
    require_finite_result, require_non_negative, require_nonzero_count, require_positive,
};

/// Payments per year for a monthly amortizing loan.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Calculates the fixed monthly payment of an amortizing loan, rounded to cents.
///
/// `M = P × r(1 + r)^N / ((1 + r)^N − 1)` with `r = annual_rate / 12` and
/// `N = years × 12`. A zero rate spreads the principal evenly over the term.
///
/// # Example
///
/// ```rust
/// use fincalc::monthly_payment;
///
/// // 30-year mortgage at 4%
/// assert_eq!(monthly_payment(200_000.0, 0.04, 30).unwrap(), 954.83);
/// ```
pub fn monthly_payment(principal: f64, annual_rate: f64, years: u32) -> FinanceResult<f64> {
    let payment = amortized_payment(principal, annual_rate, years)?;
    Ok(CalculatorConfig::default().round(payment))
}

/// Unrounded monthly payment.
pub(crate) fn amortized_payment(principal: f64, annual_rate: f64, years: u32) -> FinanceResult<f64> {
    let principal = require_positive("principal", principal)?;
    let annual_rate = require_non_negative("annual_rate", annual_rate)?;
    let years = require_nonzero_count("years", years)?;

    let num_payments = f64::from(years) * f64::from(MONTHS_PER_YEAR);

    if annual_rate == 0.0 {
        log::debug!("zero rate loan, payment is principal / {num_payments}");
        return Ok(principal / num_payments);
    }

    let monthly_rate = annual_rate / f64::from(MONTHS_PER_YEAR);
    let growth = (1.0 + monthly_rate).powf(num_payments);
    // growth - 1.0 is zero when the monthly rate is below f64 resolution
    let payment = require_finite_result(
        "principal, annual_rate, years",
        principal * (monthly_rate * growth) / (growth - 1.0),
    )?;
    log::trace!("monthly payment: {payment} over {num_payments} payments");
    Ok(payment)
}
