//! # Tenor Bonds
//!
//! Bond pricing and yield-to-maturity analytics for the Tenor library.
//!
//! This crate provides:
//!
//! - **Parameters**: Immutable bond inputs with derived schedule quantities
//! - **Pricing**: Present value of a level-coupon-plus-principal stream at
//!   a flat per-period rate
//! - **Yield**: Bisection yield-to-maturity solver with derived return
//!   metrics (nominal, effective annual, current yield, total return)
//! - **Schedule**: Display-grade payout projection (coupon and principal
//!   timeline)
//!
//! The solver is a pure function of its inputs: no I/O, no shared state,
//! no wall-clock dependence beyond the externally supplied years to
//! maturity. Calls may run concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = BondParameters {
//!     face_value: 1000.0,
//!     market_price: 994.0,
//!     coupon_rate: 9.0,
//!     coupon_frequency: 12,
//!     years_to_maturity: 1.0,
//! };
//!
//! let result = YtmSolver::new().solve(&bond).unwrap();
//! assert!((result.ytm_annual - 0.0955).abs() < 0.002);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unused_self)]

pub mod error;
pub mod pricing;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{price, YtmSolver};
    pub use crate::schedule::{payout_schedule, years_to_maturity, PayoutEntry};
    pub use crate::types::{BondParameters, YieldResult};
}

pub use error::{BondError, BondResult};
pub use pricing::{price, YtmSolver};
pub use types::{BondParameters, YieldResult};
