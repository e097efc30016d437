//! # Horizon Engine
//!
//! Time-value-of-money solver pipelines and tax-aware income engine for the
//! Horizon financial planning library.
//!
//! Given any four of {present value, future value, contribution, period,
//! rate}, a pipeline solves for the fifth under a configurable rate regime
//! (fixed, benchmark-linked, or benchmark-indexed), an optional progressive
//! withholding tax keyed on the holding period, and an optional discrete
//! coupon payout schedule.
//!
//! The engine is a pure library: no I/O, no shared mutable state, and every
//! `CalculationRequest` → `CalculationResult` call is independent and safe
//! to run concurrently. The only ambient input is the reference date each
//! pipeline takes for business-day arithmetic, which callers inject
//! explicitly.
//!
//! ## Example
//!
//! ```rust
//! use horizon_core::types::{Date, PeriodUnit};
//! use horizon_engine::{solve_future_value, CalculationRequest};
//! use rust_decimal_macros::dec;
//!
//! let request = CalculationRequest::builder()
//!     .present_value(dec!(1000))
//!     .rate(dec!(0.01))
//!     .period(12, PeriodUnit::Month)
//!     .build();
//!
//! let today = Date::from_ymd(2025, 1, 6).unwrap();
//! let result = solve_future_value(&request, today).unwrap();
//! assert_eq!(result.future_value.to_string(), "1126.83");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod coupon;
pub mod error;
pub mod income;
pub mod rates;
mod request;
mod result;
pub mod solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::request::{CalculationRequest, CalculationRequestBuilder, PayoutSchedule};
    pub use crate::result::CalculationResult;
    pub use crate::solve::{
        solve_contribution, solve_future_value, solve_period, solve_present_value, solve_rate,
    };
}

pub use error::{EngineError, EngineResult};
pub use request::{CalculationRequest, CalculationRequestBuilder, PayoutSchedule};
pub use result::CalculationResult;
pub use solve::{
    solve_contribution, solve_future_value, solve_period, solve_present_value, solve_rate,
};
