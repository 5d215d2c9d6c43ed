//! # Fincalc
//!
//! Closed-form financial formulas with validated inputs.
//!
//! This crate provides:
//!
//! - **Interest**: compound interest and ordinary annuity future value
//! - **Loans**: fixed monthly payment of an amortizing loan
//! - **Returns**: annualized investment return
//! - **Portfolio**: total value and amount-weighted average return
//! - **Risk**: mean, sample volatility and Sharpe ratio of a return series
//! - **Legacy**: integer-preserving addition and subtraction
//!
//! Every formula checks its preconditions before computing and fails with
//! [`FinanceError::InvalidArgument`] when one is violated. Results are rounded
//! to two decimals (half-to-even) at the boundary; use
//! [`FinancialCalculator`] for a different precision or midpoint rule.
//!
//! ## Example
//!
//! ```rust
//! use fincalc::prelude::*;
//!
//! assert_eq!(compound_interest(5000.0, 0.08, 3.0, 1).unwrap(), 6298.56);
//! assert_eq!(monthly_payment(200_000.0, 0.04, 30).unwrap(), 954.83);
//! assert!(portfolio_value(&[]).unwrap_err().is_invalid_argument());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod interest;
pub mod legacy;
pub mod loan;
pub mod portfolio;
pub mod returns;
pub mod risk;
pub mod rounding;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::FinancialCalculator;
    pub use crate::config::{CalculatorConfig, Validate};
    pub use crate::error::{FinanceError, FinanceResult};
    pub use crate::interest::{
        compound_interest, compound_interest_annually, future_value_annuity,
    };
    pub use crate::legacy::{add_numbers, subtract_numbers, Number};
    pub use crate::loan::monthly_payment;
    pub use crate::portfolio::{
        portfolio_value, portfolio_value_from_json, Investment, PortfolioSummary,
    };
    pub use crate::returns::investment_return;
    pub use crate::risk::{risk_assessment, RiskMetrics};
    pub use crate::rounding::RoundingMode;
}

pub use calculator::FinancialCalculator;
pub use config::CalculatorConfig;
pub use error::{FinanceError, FinanceResult};
pub use interest::{compound_interest, compound_interest_annually, future_value_annuity};
pub use legacy::{add_numbers, subtract_numbers, Number};
pub use loan::monthly_payment;
pub use portfolio::{portfolio_value, portfolio_value_from_json, Investment, PortfolioSummary};
pub use returns::investment_return;
pub use risk::{risk_assessment, RiskMetrics};
pub use rounding::RoundingMode;
