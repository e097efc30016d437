//! Business day calendars.
//!
//! Planning calculations quote elapsed time both in calendar days and in
//! business days. This module provides the weekend-only calendar used for
//! that conversion: Saturdays and Sundays are excluded, no holiday data.

use chrono::Weekday;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Hard bound on the day-by-day walk in
/// [`Calendar::calendar_days_for_business_days`].
///
/// The walk advances at most one weekend per five business days, so any
/// realistic planning horizon is orders of magnitude below this.
const MAX_WALK_DAYS: i64 = 1_000_000;

/// Trait for business day calendars.
///
/// A calendar determines which days count as business days; everything else
/// is derived from that single predicate.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the calendar-day offset from `reference` after which
    /// `business_days` business days have elapsed.
    ///
    /// Walks forward one calendar day at a time, counting only business
    /// days, until the requested count is reached.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Calendar` if the walk exceeds the internal
    /// iteration bound before reaching the requested count.
    fn calendar_days_for_business_days(
        &self,
        reference: Date,
        business_days: u32,
    ) -> CoreResult<i64> {
        let mut offset: i64 = 0;
        let mut counted: u32 = 0;

        while counted < business_days {
            offset += 1;
            if offset > MAX_WALK_DAYS {
                return Err(CoreError::calendar(format!(
                    "walk exceeded {MAX_WALK_DAYS} calendar days resolving {business_days} business days"
                )));
            }
            if self.is_business_day(reference.add_days(offset)) {
                counted += 1;
            }
        }

        Ok(offset)
    }

    /// Counts business days between two dates (exclusive of start, inclusive
    /// of end).
    ///
    /// This is the inverse of [`Self::calendar_days_for_business_days`]: it
    /// filters a fixed calendar window by the same business-day predicate.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// A weekend-only calendar (no holidays).
///
/// Saturdays and Sundays are the only excluded days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
