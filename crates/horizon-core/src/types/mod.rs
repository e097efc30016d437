//! Core domain types.

mod date;
mod period_unit;
mod rate_mode;

pub use date::Date;
pub use period_unit::PeriodUnit;
pub use rate_mode::{Benchmark, RateMode};
