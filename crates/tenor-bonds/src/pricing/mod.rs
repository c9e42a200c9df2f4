//! Bond pricing and yield calculations.
//!
//! [`price`] is the leaf pricing function: present value of a level coupon
//! stream plus discounted principal at a flat per-period rate.
//! [`YtmSolver`] inverts it, finding the periodic rate that reproduces an
//! observed market price and deriving annualized yields and summary return
//! metrics from it.

mod price;
mod yield_solver;

pub use price::price;
pub use yield_solver::{YtmSolver, YIELD_BRACKET};
