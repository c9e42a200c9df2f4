//! # Tenor Math
//!
//! Numerical root finding for the Tenor bond analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root finders for monotone objectives
//! - **Configuration**: Shared tolerance and iteration settings
//!
//! ## Design Philosophy
//!
//! - **Determinism**: Fixed iteration budgets, no wall-clock dependence
//! - **Numerical Stability**: Explicit handling of bracket collapse and
//!   near-zero denominators
//! - **Pure Functions**: No shared state; every call is independent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisect_decreasing, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
