//! Yield-to-maturity solver.
//!
//! Inverts the pricing function by bisection: finds the per-period
//! discount rate at which the present value of the bond's cash flows
//! equals its market price, then derives annualized yields and summary
//! return metrics.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::pricing::YtmSolver;
//! use tenor_bonds::types::BondParameters;
//!
//! let bond = BondParameters {
//!     face_value: 1000.0,
//!     market_price: 950.0,
//!     coupon_rate: 5.0,
//!     coupon_frequency: 2,
//!     years_to_maturity: 5.0,
//! };
//!
//! let result = YtmSolver::new().solve(&bond).unwrap();
//! assert!(result.ytm_annual > 0.05); // discount bond yields above coupon
//! ```

use log::debug;

use tenor_math::solvers::{bisect_decreasing, SolverConfig};
use tenor_math::MathError;

use crate::error::{BondError, BondResult};
use crate::pricing::price;
use crate::types::{BondParameters, YieldResult};

/// Default per-period rate bracket for the yield search: -99.99% to +500%
/// per period.
///
/// These bounds are the assumed plausible range, empirical rather than
/// derived. A true yield outside the bracket is not flagged as
/// out-of-range; the search walks to the nearest bound and fails the
/// residual check instead.
pub const YIELD_BRACKET: (f64, f64) = (-0.9999, 5.0);

/// Yield-to-maturity solver.
///
/// Stateless and reentrant: each [`solve`](Self::solve) call is an
/// independent computation bounded by the configured iteration budget.
#[derive(Debug, Clone)]
pub struct YtmSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Per-period rate bracket searched by bisection.
    bracket: (f64, f64),
}

impl Default for YtmSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YtmSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-7 absolute on price.
    /// Default max iterations: 100.
    /// Default bracket: [`YIELD_BRACKET`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            bracket: YIELD_BRACKET,
        }
    }

    /// Sets the absolute price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the per-period rate bracket.
    #[must_use]
    pub fn with_bracket(mut self, lo: f64, hi: f64) -> Self {
        self.bracket = (lo, hi);
        self
    }

    /// Solves for the bond's yield to maturity and derived return metrics.
    ///
    /// Preconditions are checked first (finite fields, positive maturity
    /// and price, at least one coupon period); each violation maps to its
    /// own [`BondError`] variant. Zero-coupon bonds are solved in closed
    /// form; coupon-bearing bonds by bisection over the configured
    /// bracket.
    ///
    /// On success the result satisfies the round-trip contract: pricing
    /// the bond at `ytm_periodic` reproduces `market_price` within the
    /// solver tolerance.
    pub fn solve(&self, bond: &BondParameters) -> BondResult<YieldResult> {
        let periods = bond.validate()?;

        if bond.coupon_rate == 0.0 {
            return self.solve_zero_coupon(bond, periods);
        }

        let objective = |rate: f64| price(rate, bond, periods) - bond.market_price;

        let (lo, hi) = self.bracket;
        let solved = bisect_decreasing(objective, lo, hi, &self.config).map_err(|err| match err {
            MathError::ConvergenceFailed { iterations, .. } => {
                BondError::YieldConvergenceFailed { iterations }
            }
            other => BondError::from(other),
        })?;

        debug!(
            "YTM converged in {} iterations (residual {:.2e})",
            solved.iterations, solved.residual
        );

        let ytm_periodic = solved.root;
        let total_coupon_payments = bond.coupon_payment() * periods as f64;
        let total_return = total_coupon_payments + bond.face_value - bond.market_price;

        Ok(self.build_result(bond, ytm_periodic, total_coupon_payments, total_return))
    }

    /// Closed-form branch for zero-coupon bonds.
    ///
    /// Under the non-negative-yield model a zero-coupon bond cannot trade
    /// above par; that case is reported as having no valid yield rather
    /// than solving for a negative rate.
    fn solve_zero_coupon(&self, bond: &BondParameters, periods: i64) -> BondResult<YieldResult> {
        if bond.market_price > bond.face_value {
            return Err(BondError::AboveParZeroCoupon {
                price: bond.market_price,
                face: bond.face_value,
            });
        }

        let ytm_periodic = (bond.face_value / bond.market_price).powf(1.0 / periods as f64) - 1.0;
        let total_return = bond.face_value - bond.market_price;

        Ok(self.build_result(bond, ytm_periodic, 0.0, total_return))
    }

    /// Derives the annualized yields and return metrics shared by both
    /// branches.
    fn build_result(
        &self,
        bond: &BondParameters,
        ytm_periodic: f64,
        total_coupon_payments: f64,
        total_return: f64,
    ) -> YieldResult {
        let frequency = f64::from(bond.coupon_frequency);

        YieldResult {
            ytm_periodic,
            ytm_annual: ytm_periodic * frequency,
            ytm_effective_annual: (1.0 + ytm_periodic).powf(frequency) - 1.0,
            current_yield: bond.annual_coupon() / bond.market_price,
            total_coupon_payments,
            total_return,
            return_on_investment: total_return / bond.market_price,
        }
    }
}
