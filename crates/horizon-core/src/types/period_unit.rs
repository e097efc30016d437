//! Calendar period units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Calendar granularity for period-denominated quantities.
///
/// Every period, contribution, and nominal rate in a calculation request is
/// denominated in one of these units. The enum is closed: an unknown unit is
/// unrepresentable, and string parsing fails with [`CoreError::InvalidUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodUnit {
    /// One month (30 days)
    #[default]
    Month,
    /// Two months (60 days)
    TwoMonths,
    /// A quarter (3 months / 90 days)
    Quarter,
    /// Half a year (6 months / 182.5 days)
    HalfYear,
    /// A full year (12 months / 365 days)
    Year,
}

impl PeriodUnit {
    /// Returns the number of months in one unit.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            PeriodUnit::Month => 1,
            PeriodUnit::TwoMonths => 2,
            PeriodUnit::Quarter => 3,
            PeriodUnit::HalfYear => 6,
            PeriodUnit::Year => 12,
        }
    }

    /// Returns the number of calendar days in one unit.
    ///
    /// Uses the 30-day banking month; a half-year is 182.5 days so that two
    /// half-years make exactly one 365-day year.
    #[must_use]
    pub fn days(&self) -> f64 {
        match self {
            PeriodUnit::Month => 30.0,
            PeriodUnit::TwoMonths => 60.0,
            PeriodUnit::Quarter => 90.0,
            PeriodUnit::HalfYear => 182.5,
            PeriodUnit::Year => 365.0,
        }
    }

    /// Returns the number of units per year.
    #[must_use]
    pub fn per_year(&self) -> u32 {
        12 / self.months()
    }

    /// Converts an amount denominated per `self` into the equivalent amount
    /// per `to`, scaling linearly by the ratio of the units' month counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use horizon_core::types::PeriodUnit;
    /// use rust_decimal_macros::dec;
    ///
    /// // 300 per quarter is 100 per month
    /// let monthly = PeriodUnit::Quarter.convert_amount(PeriodUnit::Month, dec!(300));
    /// assert_eq!(monthly, dec!(100));
    /// ```
    #[must_use]
    pub fn convert_amount(&self, to: PeriodUnit, amount: Decimal) -> Decimal {
        amount * Decimal::from(to.months()) / Decimal::from(self.months())
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodUnit::Month => "month",
            PeriodUnit::TwoMonths => "two-months",
            PeriodUnit::Quarter => "quarter",
            PeriodUnit::HalfYear => "half-year",
            PeriodUnit::Year => "year",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PeriodUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(PeriodUnit::Month),
            "two-months" => Ok(PeriodUnit::TwoMonths),
            "quarter" => Ok(PeriodUnit::Quarter),
            "half-year" => Ok(PeriodUnit::HalfYear),
            "year" => Ok(PeriodUnit::Year),
            other => Err(CoreError::invalid_unit(other)),
        }
    }
}
