//! Risk statistics for a series of periodic returns.

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::FinanceResult;
use crate::validation::{require_finite, require_finite_result, require_non_empty};

/// Basic risk metrics of a return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Arithmetic mean of the returns.
    pub mean_return: f64,
    /// Sample standard deviation of the returns.
    pub volatility: f64,
    /// Mean over volatility, with a risk-free rate of zero.
    pub sharpe_ratio: f64,
}

impl RiskMetrics {
    pub(crate) fn rounded(self, config: &CalculatorConfig) -> Self {
        Self {
            mean_return: config.round(self.mean_return),
            volatility: config.round(self.volatility),
            sharpe_ratio: config.round(self.sharpe_ratio),
        }
    }
}

/// Calculates mean, volatility and Sharpe ratio of periodic returns.
///
/// Volatility uses the `n − 1` sample estimator and is zero for a single
/// observation. A series with zero volatility reports a Sharpe ratio of zero.
///
/// # Example
///
/// ```rust
/// use fincalc::risk_assessment;
///
/// let metrics = risk_assessment(&[8.0, 12.0, -3.0, 15.0, 6.0]).unwrap();
/// assert_eq!(metrics.mean_return, 7.6);
/// assert_eq!(metrics.volatility, 6.88);
/// ```
pub fn risk_assessment(returns: &[f64]) -> FinanceResult<RiskMetrics> {
    let metrics = assess(returns)?;
    Ok(metrics.rounded(&CalculatorConfig::default()))
}

/// Unrounded risk metrics.
pub(crate) fn assess(returns: &[f64]) -> FinanceResult<RiskMetrics> {
    let returns = require_non_empty("returns", returns)?;
    for &r in returns {
        require_finite("returns", r)?;
    }

    let n = returns.len() as f64;
    let mean = require_finite_result("returns", returns.iter().sum::<f64>() / n)?;

    let variance = if returns.len() > 1 {
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        log::debug!("single observation, volatility is zero");
        0.0
    };
    let volatility = require_finite_result("returns", variance.sqrt())?;

    let sharpe_ratio = if volatility != 0.0 {
        require_finite_result("returns", mean / volatility)?
    } else {
        log::debug!("zero volatility, sharpe ratio reported as zero");
        0.0
    };

    log::trace!("risk: mean={mean}, volatility={volatility}, sharpe={sharpe_ratio}");
    Ok(RiskMetrics {
        mean_return: mean,
        volatility,
        sharpe_ratio,
    })
}
