//! Payout-schedule projection and calendar helpers.
//!
//! The projection is a display-grade timeline of coupon and principal
//! cash flows walked backward from maturity. It is derived and
//! non-authoritative: the yield solver never consumes it, and its dates
//! are simple month arithmetic with no business-day adjustment.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days per year used when converting a maturity date into a year
/// fraction.
const DAYS_PER_YEAR: f64 = 365.25;

/// A single projected payout: coupon interest and, at maturity, principal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutEntry {
    /// Payment date.
    pub date: NaiveDate,
    /// Coupon interest paid on this date, scaled by quantity.
    pub interest: f64,
    /// Principal repaid on this date (zero except at maturity).
    pub principal: f64,
}

/// Projects the remaining coupon and principal payouts for a holding of
/// `quantity` units.
///
/// Payment dates step backward from `maturity` in `12 / coupon_frequency`
/// month increments (day of month clamped) while strictly after `as_of`,
/// then come back in chronological order. Every date pays the per-period
/// coupon; the maturity date additionally repays `face_value * quantity`.
///
/// Returns an empty projection when maturity is not in the future, the
/// frequency is zero, the quantity is not positive, or any numeric input
/// is non-finite. A frequency above 12 cannot be stepped in whole months;
/// that degenerate case projects a single principal-only payout at
/// maturity.
#[must_use]
pub fn payout_schedule(
    face_value: f64,
    coupon_rate: f64,
    coupon_frequency: u32,
    quantity: f64,
    maturity: NaiveDate,
    as_of: NaiveDate,
) -> Vec<PayoutEntry> {
    if coupon_frequency == 0
        || !face_value.is_finite()
        || !coupon_rate.is_finite()
        || !quantity.is_finite()
        || quantity <= 0.0
        || maturity <= as_of
    {
        return Vec::new();
    }

    let months_per_period = 12 / coupon_frequency;
    if months_per_period == 0 {
        return vec![PayoutEntry {
            date: maturity,
            interest: 0.0,
            principal: face_value * quantity,
        }];
    }

    let coupon_payment = face_value * (coupon_rate / 100.0) / f64::from(coupon_frequency);

    let mut dates = Vec::new();
    let mut current = maturity;
    while current > as_of {
        dates.push(current);
        match current.checked_sub_months(Months::new(months_per_period)) {
            Some(prev) => current = prev,
            None => break,
        }
    }
    dates.reverse();

    dates
        .into_iter()
        .map(|date| PayoutEntry {
            date,
            interest: coupon_payment * quantity,
            principal: if date == maturity {
                face_value * quantity
            } else {
                0.0
            },
        })
        .collect()
}

/// Converts a maturity date into a year fraction relative to `as_of`,
/// using a 365.25-day year.
///
/// The yield solver accepts this value as an opaque float; callers are
/// free to substitute their own day-count convention.
#[must_use]
pub fn years_to_maturity(maturity: NaiveDate, as_of: NaiveDate) -> f64 {
    (maturity - as_of).num_days() as f64 / DAYS_PER_YEAR
}
