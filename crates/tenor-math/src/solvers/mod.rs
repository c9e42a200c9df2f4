//! Root-finding algorithms.
//!
//! This module provides the numerical solver used for yield calculations:
//!
//! - [`bisect_decreasing`]: Bisection specialized to monotonically
//!   decreasing objectives
//!
//! # Why not a sign-bracketing bisection?
//!
//! A textbook bisection rejects brackets where `f(lo)` and `f(hi)` share a
//! sign. Yield searches instead rely on the objective being monotonically
//! decreasing over the bracket: when the true root lies outside, the search
//! degrades to the nearest bound and the failure surfaces through the final
//! residual check rather than up front. That contract is kept explicit here.
//!
//! # Example
//!
//! ```rust
//! use tenor_math::solvers::{bisect_decreasing, SolverConfig};
//!
//! // f(x) = 4 - x^2 is decreasing on [0, 4]; root at x = 2
//! let f = |x: f64| 4.0 - x * x;
//!
//! let result = bisect_decreasing(f, 0.0, 4.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 2.0).abs() < 1e-6);
//! ```

mod bisection;

pub use bisection::bisect_decreasing;

/// Default absolute tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Slack factor applied to the tolerance in the post-loop residual check.
///
/// A search that stops on iteration budget or bracket collapse is still
/// accepted when its residual is within `RESIDUAL_SLACK * tolerance`;
/// anything beyond that is reported as a convergence failure.
pub const RESIDUAL_SLACK: f64 = 10.0;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Absolute tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
