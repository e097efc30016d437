//! # Horizon Core
//!
//! Core types, calendars, and constant tables for the Horizon financial
//! planning library.
//!
//! This crate provides the foundational building blocks used throughout
//! Horizon:
//!
//! - **Types**: Domain-specific types like `Date`, `PeriodUnit`, `RateMode`
//! - **Business Day Calendar**: Weekend-only calendar with day-walk and
//!   window-filter conversions
//! - **Withholding Table**: The progressive holding-period tax tiers
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Closed enums make unknown units and illegal rate/benchmark
//!   combinations unrepresentable
//! - **Constant Tables**: Benchmark levels and tax tiers are immutable
//!   process-wide data
//! - **Explicit Over Implicit**: Reference dates are always injected, never
//!   read from the clock inside a calculation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod types;
pub mod withholding;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, WeekendCalendar};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Benchmark, Date, PeriodUnit, RateMode};
    pub use crate::withholding::rate_for_holding_days;
}

pub use error::{CoreError, CoreResult};
pub use types::{Benchmark, Date, PeriodUnit, RateMode};
