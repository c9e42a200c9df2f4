//! Present value of a fixed-coupon cash-flow stream.

use tenor_math::solvers::DEFAULT_TOLERANCE;

use crate::types::BondParameters;

/// Rates closer to zero than this are treated as exactly zero to avoid a
/// near-zero denominator in the annuity formula. Matches the solver's
/// default tolerance.
const RATE_EPSILON: f64 = DEFAULT_TOLERANCE;

/// Present value of the bond's remaining cash flows at a flat per-period
/// discount rate.
///
/// The stream is `periods` level coupon payments of
/// `face_value * (coupon_rate / 100) / coupon_frequency` plus the face
/// value redeemed in the final period.
///
/// Two domain conventions keep the yield search uniform:
///
/// - `|rate| < 1e-7` prices as the undiscounted sum
///   `coupon * periods + face`, the limiting case of the annuity formula
///   as the rate approaches zero.
/// - `rate <= -1` returns `f64::INFINITY`. A discount rate at or below
///   -100% has no meaningful present value; the sentinel reads as "too
///   high a price" so a bisection over the rate keeps searching upward.
///
/// For `rate > -1` the function is monotonically decreasing in `rate`,
/// the property the yield solver relies on.
#[must_use]
pub fn price(rate: f64, bond: &BondParameters, periods: i64) -> f64 {
    let coupon_payment = bond.coupon_payment();
    let n = periods as f64;

    if rate.abs() < RATE_EPSILON {
        return coupon_payment * n + bond.face_value;
    }

    if rate <= -1.0 {
        return f64::INFINITY;
    }

    let coupon_pv = coupon_payment * (1.0 - (1.0 + rate).powf(-n)) / rate;
    let face_pv = bond.face_value / (1.0 + rate).powf(n);

    coupon_pv + face_pv
}
