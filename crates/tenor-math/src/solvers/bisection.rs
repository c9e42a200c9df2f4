//! Bisection for monotonically decreasing objectives.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, RESIDUAL_SLACK};

/// Bisection root finder for a monotonically decreasing function.
///
/// Repeatedly halves `[lo, hi]` assuming `f` decreases over the interval:
/// a positive midpoint value means the root lies above the midpoint, so the
/// lower bound is raised; otherwise the upper bound is lowered.
///
/// There is deliberately no sign check at the endpoints. When the true root
/// falls outside the bracket the search walks to the nearest bound and the
/// failure is only detected by the final residual check, which accepts a
/// residual up to [`RESIDUAL_SLACK`] times the configured tolerance. This
/// mirrors how yield searches treat implausible inputs: they are not
/// flagged as out-of-range, they simply fail to converge.
///
/// The iteration loop terminates early when the midpoint equals either
/// bound (the floating-point convergence floor) or when the residual drops
/// below `config.tolerance`.
///
/// # Arguments
///
/// * `f` - Monotonically decreasing function for which to find a root
/// * `lo` - Lower bound of the bracket
/// * `hi` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns [`MathError::InvalidBracket`] when `lo` is not strictly below
/// `hi`, and [`MathError::ConvergenceFailed`] when the final residual
/// exceeds the slack-adjusted tolerance.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisect_decreasing, SolverConfig};
///
/// // Present value of 100 due in one period, target price 95
/// let f = |r: f64| 100.0 / (1.0 + r) - 95.0;
///
/// let result = bisect_decreasing(f, -0.9999, 5.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 100.0 / 95.0 + 1.0).abs() < 1e-6);
/// ```
pub fn bisect_decreasing<F>(
    f: F,
    lo: f64,
    hi: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if !(lo < hi) {
        return Err(MathError::InvalidBracket { lo, hi });
    }

    let mut lo = lo;
    let mut hi = hi;
    let mut mid = (lo + hi) / 2.0;
    let mut iterations = 0;

    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        iterations = iteration + 1;

        // Floating-point convergence floor: the interval can no longer halve.
        if mid == lo || mid == hi {
            break;
        }

        let f_mid = f(mid);
        trace!("bisection iteration {iteration}: mid={mid} f(mid)={f_mid}");

        if f_mid.abs() < config.tolerance {
            break;
        }

        // f is decreasing: a positive value means the root lies above mid.
        if f_mid > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // Re-evaluate at the final midpoint: an early break may have left the
    // residual unchecked, and a root outside the bracket shows up here.
    let residual = f(mid);
    if !(residual.abs() < RESIDUAL_SLACK * config.tolerance) {
        debug!(
            "bisection failed to converge after {iterations} iterations (residual {residual:.2e})"
        );
        return Err(MathError::convergence_failed(iterations, residual));
    }

    Ok(SolverResult {
        root: mid,
        iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_linear_root() {
        // f(x) = 1 - x, decreasing, root at 1
        let f = |x: f64| 1.0 - x;

        let result = bisect_decreasing(f, 0.0, 5.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-6);
        assert!(result.residual.abs() < 1e-6);
    }

    #[test]
    fn test_discounting_root() {
        // 100 / (1 + r) = 90 => r = 1/9
        let f = |r: f64| 100.0 / (1.0 + r) - 90.0;

        let result = bisect_decreasing(f, -0.9999, 5.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0 / 9.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_root() {
        // 100 / (1 + r) = 110 => r < 0
        let f = |r: f64| 100.0 / (1.0 + r) - 110.0;

        let result = bisect_decreasing(f, -0.9999, 5.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 100.0 / 110.0 - 1.0, epsilon = 1e-6);
        assert!(result.root < 0.0);
    }

    #[test]
    fn test_root_outside_bracket_fails() {
        // Root at x = 10, bracket only reaches 5: search degrades to the
        // upper bound and the residual check rejects it.
        let f = |x: f64| 10.0 - x;

        let result = bisect_decreasing(f, 0.0, 5.0, &SolverConfig::default());

        match result {
            Err(MathError::ConvergenceFailed { residual, .. }) => {
                assert!(residual.abs() >= 1e-6);
            }
            other => panic!("Expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_infinite_objective_fails() {
        // An objective that pins +inf across the bracket never converges.
        let f = |_x: f64| f64::INFINITY;

        let result = bisect_decreasing(f, 0.0, 1.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| 1.0 - x;

        assert!(matches!(
            bisect_decreasing(f, 5.0, 0.0, &SolverConfig::default()),
            Err(MathError::InvalidBracket { .. })
        ));
        assert!(matches!(
            bisect_decreasing(f, 1.0, 1.0, &SolverConfig::default()),
            Err(MathError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_bracket_collapse_terminates() {
        // A root the tolerance can never certify still terminates once the
        // interval stops halving in floating point, then passes or fails on
        // the residual alone.
        let f = |x: f64| 1.0 - x;
        let config = SolverConfig::new(1e-30, 10_000);

        let result = bisect_decreasing(f, 0.0, 5.0, &config);

        // Residual at the collapsed midpoint is at machine precision, but
        // 10 * 1e-30 is stricter than f64 can represent near 1.0.
        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    proptest! {
        /// Any decreasing line with its root inside the bracket is
        /// recovered to within the tolerance over the slope.
        #[test]
        fn prop_recovers_root_of_decreasing_line(
            root in -0.9..4.9f64,
            slope in 0.1..10.0f64,
        ) {
            let f = |x: f64| slope * (root - x);

            let result = bisect_decreasing(f, -0.9999, 5.0, &SolverConfig::default()).unwrap();
            prop_assert!((result.root - root).abs() < 1e-6);
        }
    }

    #[test]
    fn test_iterations_bounded() {
        let f = |x: f64| 2.5 - x;
        let config = SolverConfig::default();

        let result = bisect_decreasing(f, 0.0, 5.0, &config).unwrap();
        assert!(result.iterations <= config.max_iterations);
        // Midpoint of [0, 5] is the exact root; should converge immediately.
        assert_eq!(result.iterations, 1);
    }
}
