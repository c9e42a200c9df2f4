//! Core bond data types.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Input parameters for a yield calculation.
///
/// Immutable per calculation; the solver takes these by reference and
/// never mutates them. Time to maturity is an opaque positive float
/// supplied by the caller (typically derived from a maturity date via
/// [`crate::schedule::years_to_maturity`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondParameters {
    /// Redemption amount per unit (typically 100 or 1000).
    pub face_value: f64,
    /// Current traded price per unit.
    pub market_price: f64,
    /// Annual coupon rate as a percentage (9.0 means 9%). Zero for
    /// zero-coupon bonds.
    pub coupon_rate: f64,
    /// Coupon payments per year. Conventionally 1, 2, 4, or 12, but any
    /// positive integer is accepted.
    pub coupon_frequency: u32,
    /// Time remaining until redemption, in years.
    pub years_to_maturity: f64,
}

impl BondParameters {
    /// Total number of coupon periods remaining, rounded to the nearest
    /// whole period.
    ///
    /// May be zero or negative for degenerate inputs; [`Self::validate`]
    /// rejects those.
    #[must_use]
    pub fn periods(&self) -> i64 {
        (self.years_to_maturity * f64::from(self.coupon_frequency)).round() as i64
    }

    /// Cash paid per coupon period.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.annual_coupon() / f64::from(self.coupon_frequency)
    }

    /// Total coupon cash paid per year.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.face_value * (self.coupon_rate / 100.0)
    }

    /// Checks the solver preconditions and returns the period count.
    ///
    /// The first violation wins: non-finite fields, then non-positive
    /// maturity, then non-positive price, then an empty coupon schedule.
    pub fn validate(&self) -> BondResult<i64> {
        for (field, value) in [
            ("face_value", self.face_value),
            ("market_price", self.market_price),
            ("coupon_rate", self.coupon_rate),
            ("years_to_maturity", self.years_to_maturity),
        ] {
            if !value.is_finite() {
                return Err(BondError::invalid_input(field));
            }
        }

        if self.years_to_maturity <= 0.0 {
            return Err(BondError::InvalidMaturity {
                years: self.years_to_maturity,
            });
        }
        if self.market_price <= 0.0 {
            return Err(BondError::InvalidPrice {
                price: self.market_price,
            });
        }

        let periods = self.periods();
        if periods <= 0 {
            return Err(BondError::InvalidSchedule { periods });
        }

        Ok(periods)
    }
}

/// Result of a yield calculation.
///
/// Created fresh on each solve and never mutated afterwards. Feeding
/// `ytm_periodic` back into [`crate::pricing::price`] with the same bond
/// and period count reproduces the market price within the solver
/// tolerance; that round-trip is the defining correctness contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Per-period discount rate solved for (closed form for zero-coupon
    /// bonds).
    pub ytm_periodic: f64,
    /// Nominal annualized rate: periodic rate times frequency, without
    /// compounding.
    pub ytm_annual: f64,
    /// Effective annual rate: the compounded annual equivalent of the
    /// periodic rate.
    pub ytm_effective_annual: f64,
    /// Annual coupon income divided by market price.
    pub current_yield: f64,
    /// Sum of all remaining coupon payments (zero for zero-coupon bonds).
    pub total_coupon_payments: f64,
    /// Coupon income plus redemption minus market price.
    pub total_return: f64,
    /// Total return relative to market price.
    pub return_on_investment: f64,
}
