//! Compound interest and annuity growth.

use crate::config::CalculatorConfig;
use crate::error::FinanceResult;
use crate::validation::{require_finite_result, require_non_negative, require_nonzero_count};

/// Compounding periods per year when none is given.
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 1;

/// Calculates the amount after compound interest, rounded to cents.
///
/// `amount = principal × (1 + rate/n)^(n × time)`
///
/// # Arguments
///
/// * `principal` - Initial amount
/// * `rate` - Annual rate as a decimal (0.05 for 5%)
/// * `time` - Time in years
/// * `compounds_per_year` - Compounding periods per year (`n`), at least 1.
///   [`compound_interest_annually`] uses [`DEFAULT_COMPOUNDS_PER_YEAR`].
///
/// # Example
///
/// ```rust
/// use fincalc::compound_interest;
///
/// assert_eq!(compound_interest(5000.0, 0.08, 3.0, 1).unwrap(), 6298.56);
/// ```
pub fn compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    compounds_per_year: u32,
) -> FinanceResult<f64> {
    let amount = compound_amount(principal, rate, time, compounds_per_year)?;
    Ok(CalculatorConfig::default().round(amount))
}

/// Compound interest with one compounding period per year.
///
/// ```rust
/// use fincalc::{compound_interest, compound_interest_annually};
///
/// assert_eq!(
///     compound_interest_annually(5000.0, 0.08, 3.0).unwrap(),
///     compound_interest(5000.0, 0.08, 3.0, 1).unwrap()
/// );
/// ```
pub fn compound_interest_annually(principal: f64, rate: f64, time: f64) -> FinanceResult<f64> {
    compound_interest(principal, rate, time, DEFAULT_COMPOUNDS_PER_YEAR)
}

/// Calculates the future value of an ordinary annuity, rounded to cents.
///
/// `FV = payment × ((1 + r)^periods − 1) / r`, or `payment × periods` when
/// `r` is zero.
///
/// # Arguments
///
/// * `payment` - Payment made at the end of each period
/// * `rate_per_period` - Interest rate per period as a decimal
/// * `periods` - Number of payments
pub fn future_value_annuity(payment: f64, rate_per_period: f64, periods: u32) -> FinanceResult<f64> {
    let fv = annuity_future_value(payment, rate_per_period, periods)?;
    Ok(CalculatorConfig::default().round(fv))
}

/// Unrounded compound amount.
pub(crate) fn compound_amount(
    principal: f64,
    rate: f64,
    time: f64,
    compounds_per_year: u32,
) -> FinanceResult<f64> {
    let principal = require_non_negative("principal", principal)?;
    let rate = require_non_negative("rate", rate)?;
    let time = require_non_negative("time", time)?;
    let n = f64::from(require_nonzero_count("compounds_per_year", compounds_per_year)?);

    let amount = require_finite_result(
        "principal, rate, time, compounds_per_year",
        principal * (1.0 + rate / n).powf(n * time),
    )?;
    log::trace!("compound amount: {amount} (principal={principal}, rate={rate}, n={n}, t={time})");
    Ok(amount)
}

/// Unrounded annuity future value.
pub(crate) fn annuity_future_value(
    payment: f64,
    rate_per_period: f64,
    periods: u32,
) -> FinanceResult<f64> {
    let payment = require_non_negative("payment", payment)?;
    let rate = require_non_negative("rate_per_period", rate_per_period)?;
    let periods = f64::from(periods);

    if rate == 0.0 {
        log::debug!("zero rate annuity, future value is payment x periods");
        return require_finite_result("payment, periods", payment * periods);
    }

    let fv = require_finite_result(
        "payment, rate_per_period, periods",
        payment * (((1.0 + rate).powf(periods) - 1.0) / rate),
    )?;
    log::trace!("annuity future value: {fv}");
    Ok(fv)
}
