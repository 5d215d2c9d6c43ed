//! Portfolio aggregation.
//!
//! A portfolio is a list of [`Investment`]s; [`portfolio_value`] reports the
//! total amount invested and the amount-weighted average return.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CalculatorConfig;
use crate::error::{FinanceError, FinanceResult};
use crate::validation::{
    require_finite, require_finite_result, require_non_empty, require_non_negative,
};

/// A single position in a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Amount invested. Must be non-negative.
    pub amount: f64,
    /// Return rate in percent (8.5 for 8.5%).
    pub return_rate: f64,
}

impl Investment {
    /// Creates a new investment.
    #[must_use]
    pub fn new(amount: f64, return_rate: f64) -> Self {
        Self {
            amount,
            return_rate,
        }
    }

    /// Reads an investment from a keyed JSON record.
    ///
    /// The record must be an object holding numeric `amount` and
    /// `return_rate` entries. Extra keys are ignored. Range checks happen in
    /// [`portfolio_value`].
    pub fn from_json(record: &Value) -> FinanceResult<Self> {
        let object = record.as_object().ok_or_else(|| {
            FinanceError::invalid_argument(
                "investment",
                "must be an object with 'amount' and 'return_rate'",
            )
        })?;

        let field = |key: &str| -> FinanceResult<f64> {
            let value = object
                .get(key)
                .ok_or_else(|| FinanceError::invalid_argument(key, "missing required key"))?;
            value.as_f64().ok_or_else(|| {
                FinanceError::invalid_argument(key, format!("must be a number, got {value}"))
            })
        };

        Ok(Self::new(field("amount")?, field("return_rate")?))
    }

    fn validated(&self) -> FinanceResult<Self> {
        Ok(Self {
            amount: require_non_negative("amount", self.amount)?,
            return_rate: require_finite("return_rate", self.return_rate)?,
        })
    }
}

/// Total value and weighted return of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of all investment amounts.
    pub total_value: f64,
    /// Amount-weighted average of the return rates, in percent.
    pub weighted_avg_return: f64,
}

impl PortfolioSummary {
    /// Summary of a portfolio holding nothing.
    pub const ZERO: Self = Self {
        total_value: 0.0,
        weighted_avg_return: 0.0,
    };

    pub(crate) fn rounded(self, config: &CalculatorConfig) -> Self {
        Self {
            total_value: config.round(self.total_value),
            weighted_avg_return: config.round(self.weighted_avg_return),
        }
    }
}

/// Calculates total value and amount-weighted average return.
///
/// Every investment is validated before anything is summed. When all amounts
/// are zero the summary is [`PortfolioSummary::ZERO`].
///
/// # Example
///
/// ```rust
/// use fincalc::{portfolio_value, Investment};
///
/// let summary = portfolio_value(&[
///     Investment::new(10_000.0, 7.0),
///     Investment::new(5_000.0, 12.0),
///     Investment::new(15_000.0, 5.0),
/// ])
/// .unwrap();
///
/// assert_eq!(summary.total_value, 30_000.0);
/// assert_eq!(summary.weighted_avg_return, 6.83);
/// ```
pub fn portfolio_value(investments: &[Investment]) -> FinanceResult<PortfolioSummary> {
    let summary = summarize(investments)?;
    Ok(summary.rounded(&CalculatorConfig::default()))
}

/// Calculates a portfolio summary from a JSON array of keyed records.
pub fn portfolio_value_from_json(investments: &Value) -> FinanceResult<PortfolioSummary> {
    let investments = parse_investments(investments)?;
    portfolio_value(&investments)
}

pub(crate) fn parse_investments(investments: &Value) -> FinanceResult<Vec<Investment>> {
    let records = investments.as_array().ok_or_else(|| {
        FinanceError::invalid_argument("investments", "must be a non-empty list")
    })?;
    records.iter().map(Investment::from_json).collect()
}

/// Unrounded portfolio summary.
pub(crate) fn summarize(investments: &[Investment]) -> FinanceResult<PortfolioSummary> {
    let investments = require_non_empty("investments", investments)?;
    let validated = investments
        .iter()
        .map(Investment::validated)
        .collect::<FinanceResult<Vec<_>>>()?;

    let (total, weighted) = validated.iter().fold((0.0, 0.0), |(total, weighted), inv| {
        (total + inv.amount, weighted + inv.amount * inv.return_rate)
    });

    let total = require_finite_result("amount", total)?;
    let weighted = require_finite_result("amount, return_rate", weighted)?;

    if total == 0.0 {
        log::debug!("portfolio of {} zero-amount investments", validated.len());
        return Ok(PortfolioSummary::ZERO);
    }

    Ok(PortfolioSummary {
        total_value: total,
        weighted_avg_return: require_finite_result("amount, return_rate", weighted / total)?,
    })
}
