//! Property-based tests for formula invariants.
//!
//! These tests verify properties that should hold for any valid input:
//! - Negative principals, rates, times and amounts are always rejected
//! - A zero rate leaves money unchanged
//! - The weighted return lies between the smallest and largest rate
//! - Volatility is never negative
//! - Results are already rounded
//! - A successful result is always finite, even for extreme inputs

use fincalc::prelude::*;
use fincalc::rounding::round_cents;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn amount() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0_f64
}

fn rate() -> impl Strategy<Value = f64> {
    0.0..0.5_f64
}

fn negative() -> impl Strategy<Value = f64> {
    -1_000_000.0..-1e-9_f64
}

fn wide_amount() -> impl Strategy<Value = f64> {
    0.0..1e300_f64
}

fn wide_rate() -> impl Strategy<Value = f64> {
    0.0..100.0_f64
}

fn finite_or_rejected(result: FinanceResult<f64>) -> Result<(), TestCaseError> {
    match result {
        Ok(v) => prop_assert!(v.is_finite(), "got {}", v),
        Err(e) => prop_assert!(e.is_invalid_argument(), "unexpected error {}", e),
    }
    Ok(())
}

proptest! {
    #[test]
    fn negative_inputs_always_rejected(neg in negative(), p in amount(), r in rate()) {
        prop_assert!(compound_interest(neg, r, 1.0, 1).unwrap_err().is_invalid_argument());
        prop_assert!(compound_interest(p, neg, 1.0, 1).unwrap_err().is_invalid_argument());
        prop_assert!(compound_interest(p, r, neg, 1).unwrap_err().is_invalid_argument());
        prop_assert!(monthly_payment(neg, r, 10).unwrap_err().is_invalid_argument());
        prop_assert!(monthly_payment(p + 1.0, neg, 10).unwrap_err().is_invalid_argument());
        prop_assert!(investment_return(neg, p + 1.0, 1.0).unwrap_err().is_invalid_argument());
        prop_assert!(future_value_annuity(neg, r, 10).unwrap_err().is_invalid_argument());
        prop_assert!(future_value_annuity(p, neg, 10).unwrap_err().is_invalid_argument());
        prop_assert!(portfolio_value(&[Investment::new(p, 5.0), Investment::new(neg, 5.0)])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn zero_rate_is_identity(p in amount(), t in 0.0..50.0_f64, n in 1u32..365) {
        prop_assert_eq!(compound_interest(p, 0.0, t, n).unwrap(), round_cents(p));
    }

    #[test]
    fn compound_interest_never_shrinks(p in amount(), r in rate(), t in 0.0..30.0_f64, n in 1u32..13) {
        prop_assert!(compound_interest(p, r, t, n).unwrap() >= round_cents(p));
    }

    #[test]
    fn zero_rate_annuity_is_sum_of_payments(payment in amount(), periods in 0u32..600) {
        prop_assert_eq!(
            future_value_annuity(payment, 0.0, periods).unwrap(),
            round_cents(payment * f64::from(periods))
        );
    }

    #[test]
    fn weighted_return_is_bounded(
        positions in prop::collection::vec((1.0..100_000.0_f64, -20.0..40.0_f64), 1..20)
    ) {
        let investments: Vec<_> = positions.iter().map(|&(a, r)| Investment::new(a, r)).collect();
        let summary = portfolio_value(&investments).unwrap();

        let min = positions.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max = positions.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(summary.weighted_avg_return >= round_cents(min) - 0.01);
        prop_assert!(summary.weighted_avg_return <= round_cents(max) + 0.01);
        prop_assert!(summary.total_value > 0.0);
    }

    #[test]
    fn volatility_is_non_negative(returns in prop::collection::vec(-50.0..50.0_f64, 1..50)) {
        let metrics = risk_assessment(&returns).unwrap();
        prop_assert!(metrics.volatility >= 0.0);
        if returns.len() == 1 {
            prop_assert_eq!(metrics.volatility, 0.0);
            prop_assert_eq!(metrics.sharpe_ratio, 0.0);
        }
    }

    #[test]
    fn results_are_rounded(p in amount(), r in rate(), years in 1u32..40) {
        let payment = monthly_payment(p + 1.0, r, years).unwrap();
        prop_assert_eq!(round_cents(payment), payment);
    }

    #[test]
    fn successful_results_are_finite(
        p in wide_amount(),
        r in wide_rate(),
        t in 0.0..1e6_f64,
        n in 1u32..=u32::MAX,
        count in 1u32..=u32::MAX,
    ) {
        finite_or_rejected(compound_interest(p, r, t, n))?;
        finite_or_rejected(monthly_payment(p + 1.0, r, count))?;
        finite_or_rejected(investment_return(p + 1.0, p * r + 1.0, t + 1e-6))?;
        finite_or_rejected(future_value_annuity(p, r, count))?;
    }

    #[test]
    fn successful_records_are_finite(
        positions in prop::collection::vec((0.0..1e308_f64, -1e300..1e300_f64), 1..8),
        returns in prop::collection::vec(-1e300..1e300_f64, 1..8),
    ) {
        let investments: Vec<_> = positions.iter().map(|&(a, r)| Investment::new(a, r)).collect();
        match portfolio_value(&investments) {
            Ok(s) => {
                prop_assert!(s.total_value.is_finite());
                prop_assert!(s.weighted_avg_return.is_finite());
            }
            Err(e) => prop_assert!(e.is_invalid_argument()),
        }
        match risk_assessment(&returns) {
            Ok(m) => {
                prop_assert!(m.mean_return.is_finite());
                prop_assert!(m.volatility.is_finite());
                prop_assert!(m.sharpe_ratio.is_finite());
            }
            Err(e) => prop_assert!(e.is_invalid_argument()),
        }
    }
}
