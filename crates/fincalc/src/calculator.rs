//! Configured access to every formula.

use serde_json::Value;

use crate::config::{CalculatorConfig, Validate};
use crate::error::FinanceResult;
use crate::portfolio::{parse_investments, summarize, Investment, PortfolioSummary};
use crate::risk::{assess, RiskMetrics};
use crate::{interest, loan, returns};

/// Evaluates the formulas with a fixed rounding configuration.
///
/// The free functions of this crate behave like
/// `FinancialCalculator::default()`.
///
/// # Example
///
/// ```rust
/// use fincalc::{CalculatorConfig, FinancialCalculator};
///
/// let calc = FinancialCalculator::new(CalculatorConfig::default().with_decimal_places(4)).unwrap();
/// assert_eq!(calc.investment_return(1000.0, 2000.0, 2.0).unwrap(), 41.4214);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinancialCalculator {
    config: CalculatorConfig,
}

impl FinancialCalculator {
    /// Creates a calculator, rejecting invalid configurations.
    pub fn new(config: CalculatorConfig) -> FinanceResult<Self> {
        config.validate_or_error()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// See [`crate::compound_interest`].
    pub fn compound_interest(
        &self,
        principal: f64,
        rate: f64,
        time: f64,
        compounds_per_year: u32,
    ) -> FinanceResult<f64> {
        interest::compound_amount(principal, rate, time, compounds_per_year)
            .map(|v| self.config.round(v))
    }

    /// See [`crate::compound_interest_annually`].
    pub fn compound_interest_annually(&self, principal: f64, rate: f64, time: f64) -> FinanceResult<f64> {
        self.compound_interest(principal, rate, time, interest::DEFAULT_COMPOUNDS_PER_YEAR)
    }

    /// See [`crate::monthly_payment`].
    pub fn monthly_payment(&self, principal: f64, annual_rate: f64, years: u32) -> FinanceResult<f64> {
        loan::amortized_payment(principal, annual_rate, years).map(|v| self.config.round(v))
    }

    /// See [`crate::investment_return`].
    pub fn investment_return(&self, initial: f64, final_value: f64, years: f64) -> FinanceResult<f64> {
        returns::annualized_return(initial, final_value, years).map(|v| self.config.round(v))
    }

    /// See [`crate::portfolio_value`].
    pub fn portfolio_value(&self, investments: &[Investment]) -> FinanceResult<PortfolioSummary> {
        summarize(investments).map(|s| s.rounded(&self.config))
    }

    /// See [`crate::portfolio_value_from_json`].
    pub fn portfolio_value_from_json(&self, investments: &Value) -> FinanceResult<PortfolioSummary> {
        let investments = parse_investments(investments)?;
        self.portfolio_value(&investments)
    }

    /// See [`crate::risk_assessment`].
    pub fn risk_assessment(&self, returns: &[f64]) -> FinanceResult<RiskMetrics> {
        assess(returns).map(|m| m.rounded(&self.config))
    }

    /// See [`crate::future_value_annuity`].
    pub fn future_value_annuity(
        &self,
        payment: f64,
        rate_per_period: f64,
        periods: u32,
    ) -> FinanceResult<f64> {
        interest::annuity_future_value(payment, rate_per_period, periods)
            .map(|v| self.config.round(v))
    }
}
