//! Integration tests validating the yield solver end to end.
//!
//! Scenario values were cross-checked against the reference calculator the
//! solver semantics were taken from; property tests assert the solver's
//! defining contracts over randomized inputs.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use tenor_bonds::prelude::*;

fn bond(
    face_value: f64,
    market_price: f64,
    coupon_rate: f64,
    coupon_frequency: u32,
    years_to_maturity: f64,
) -> BondParameters {
    BondParameters {
        face_value,
        market_price,
        coupon_rate,
        coupon_frequency,
        years_to_maturity,
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn monthly_nine_percent_bond_near_par() {
    let b = bond(1000.0, 994.0, 9.0, 12, 1.0);
    let result = YtmSolver::new().solve(&b).unwrap();

    assert_eq!(b.periods(), 12);
    assert_abs_diff_eq!(result.total_coupon_payments, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.total_return, 96.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.return_on_investment, 96.0 / 994.0, epsilon = 1e-9);
    // Periodic rate just above the 0.75% periodic coupon; ~9.6% nominal.
    assert!(result.ytm_periodic > 0.0075 && result.ytm_periodic < 0.009);
    assert_abs_diff_eq!(result.ytm_annual, result.ytm_periodic * 12.0, epsilon = 1e-12);
}

#[test]
fn semi_annual_treasury_style_discount() {
    // 5% semi-annual, 10 years, priced at 95: YTM ~5.66%.
    let b = bond(100.0, 95.0, 5.0, 2, 10.0);
    let result = YtmSolver::new().solve(&b).unwrap();

    assert_abs_diff_eq!(result.ytm_annual, 0.0566, epsilon = 5e-4);
    assert_abs_diff_eq!(result.current_yield, 5.0 / 95.0, epsilon = 1e-12);
}

#[test]
fn zero_coupon_five_year_deep_discount() {
    let b = bond(100.0, 62.0921323, 0.0, 1, 5.0);
    let result = YtmSolver::new().solve(&b).unwrap();

    assert_abs_diff_eq!(result.ytm_periodic, 0.10, epsilon = 1e-6);
    assert_abs_diff_eq!(result.ytm_effective_annual, 0.10, epsilon = 1e-6);
    assert_eq!(result.total_coupon_payments, 0.0);
}

#[test]
fn failure_modes_are_typed() {
    let above_par_zero = bond(1000.0, 1001.0, 0.0, 1, 5.0);
    assert!(matches!(
        YtmSolver::new().solve(&above_par_zero),
        Err(BondError::AboveParZeroCoupon { .. })
    ));

    let nan_input = bond(f64::NAN, 994.0, 9.0, 12, 1.0);
    assert!(matches!(
        YtmSolver::new().solve(&nan_input),
        Err(BondError::InvalidInput { .. })
    ));

    let no_periods = bond(1000.0, 994.0, 9.0, 1, 0.2);
    assert!(matches!(
        YtmSolver::new().solve(&no_periods),
        Err(BondError::InvalidSchedule { .. })
    ));

    let implausible = bond(1000.0, 100.0, 1.0, 1, 1.0);
    assert!(matches!(
        YtmSolver::new().solve(&implausible),
        Err(BondError::YieldConvergenceFailed { .. })
    ));
}

#[test]
fn yield_result_serializes() {
    let b = bond(1000.0, 994.0, 9.0, 12, 1.0);
    let result = YtmSolver::new().solve(&b).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: YieldResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn schedule_and_solver_agree_on_coupon_totals() {
    use chrono::NaiveDate;

    let maturity = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let b = bond(1000.0, 994.0, 9.0, 12, years_to_maturity(maturity, as_of));
    let result = YtmSolver::new().solve(&b).unwrap();

    let schedule = payout_schedule(1000.0, 9.0, 12, 1.0, maturity, as_of);
    let projected_interest: f64 = schedule.iter().map(|e| e.interest).sum();

    assert_abs_diff_eq!(projected_interest, result.total_coupon_payments, epsilon = 1e-9);
}

// ============================================================================
// Properties
// ============================================================================

fn frequency_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2), Just(4), Just(12)]
}

proptest! {
    /// Pricing at the solved periodic rate reproduces the market price
    /// within 1e-6 absolute: the solver's defining contract.
    #[test]
    fn prop_round_trip_reproduces_price(
        face in 50.0..10_000.0f64,
        coupon_rate in 0.1..15.0f64,
        frequency in frequency_strategy(),
        years in 0.5..30.0f64,
        price_factor in 0.5..1.5f64,
    ) {
        let b = bond(face, face * price_factor, coupon_rate, frequency, years);
        let result = YtmSolver::new().solve(&b).unwrap();

        let repriced = price(result.ytm_periodic, &b, b.periods());
        prop_assert!((repriced - b.market_price).abs() < 1e-6);
    }

    /// Present value falls strictly as the discount rate rises.
    ///
    /// Rates below -0.8 are excluded: with 360 periods the discount
    /// factor under/overflows and both prices saturate to infinity.
    #[test]
    fn prop_price_is_monotonically_decreasing(
        face in 50.0..10_000.0f64,
        coupon_rate in 0.0..15.0f64,
        frequency in frequency_strategy(),
        years in 0.5..30.0f64,
        r1 in -0.8..4.9f64,
        delta in 0.001..1.0f64,
    ) {
        let b = bond(face, face, coupon_rate, frequency, years);
        let periods = b.periods();
        let r2 = r1 + delta;

        prop_assert!(price(r1, &b, periods) > price(r2, &b, periods));
    }

    /// Zero-coupon bonds at or below par always solve in closed form, and
    /// the nominal/effective relationship holds.
    #[test]
    fn prop_zero_coupon_below_par_solves(
        face in 50.0..10_000.0f64,
        frequency in frequency_strategy(),
        years in 0.5..30.0f64,
        price_factor in 0.1..1.0f64,
    ) {
        let b = bond(face, face * price_factor, 0.0, frequency, years);
        let result = YtmSolver::new().solve(&b).unwrap();

        prop_assert!(result.ytm_periodic >= 0.0);
        let compounded = (1.0 + result.ytm_periodic).powi(frequency as i32) - 1.0;
        prop_assert!((result.ytm_effective_annual - compounded).abs() < 1e-12);
    }

    /// Derived metrics are consistent with one another on any success.
    #[test]
    fn prop_derived_metrics_consistent(
        face in 50.0..10_000.0f64,
        coupon_rate in 0.1..15.0f64,
        frequency in frequency_strategy(),
        years in 0.5..30.0f64,
        price_factor in 0.5..1.5f64,
    ) {
        let b = bond(face, face * price_factor, coupon_rate, frequency, years);
        let result = YtmSolver::new().solve(&b).unwrap();

        let n = b.periods() as f64;
        prop_assert!((result.total_coupon_payments - b.coupon_payment() * n).abs() < 1e-9);
        prop_assert!(
            (result.total_return
                - (result.total_coupon_payments + b.face_value - b.market_price))
                .abs()
                < 1e-9
        );
        prop_assert!(
            (result.return_on_investment - result.total_return / b.market_price).abs() < 1e-12
        );
        prop_assert!((result.ytm_annual - result.ytm_periodic * f64::from(b.coupon_frequency)).abs() < 1e-12);
    }
}
