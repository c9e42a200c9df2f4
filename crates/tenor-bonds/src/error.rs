//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
///
/// Every failure is local to the call that produced it: the solver never
/// panics on bad input and never returns a partial result.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// A required numeric field is not finite.
    #[error("Invalid input: {field} must be finite")]
    InvalidInput {
        /// The offending field name.
        field: &'static str,
    },

    /// The derived coupon schedule has no periods.
    #[error("Invalid schedule: {periods} coupon periods remain")]
    InvalidSchedule {
        /// Rounded period count.
        periods: i64,
    },

    /// Market price is zero or negative.
    #[error("Invalid price: market price {price} must be positive")]
    InvalidPrice {
        /// The offending price.
        price: f64,
    },

    /// Time to maturity is zero or negative.
    #[error("Invalid maturity: {years} years to maturity must be positive")]
    InvalidMaturity {
        /// The offending years-to-maturity value.
        years: f64,
    },

    /// A zero-coupon bond trading above par has no non-negative yield.
    #[error("Zero-coupon bond priced at {price} above face value {face} has no valid yield")]
    AboveParZeroCoupon {
        /// Market price.
        price: f64,
        /// Face (redemption) value.
        face: f64,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Math library error.
    #[error("Math error: {0}")]
    MathError(#[from] tenor_math::MathError),
}

impl BondError {
    /// Creates an invalid input error for the given field.
    #[must_use]
    pub fn invalid_input(field: &'static str) -> Self {
        Self::InvalidInput { field }
    }
}
