//! Calculation request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use horizon_core::types::{PeriodUnit, RateMode};

/// Whether growth compounds continuously or is paid out as discrete coupons.
///
/// The coupon interval only exists in the variant that uses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "payout", rename_all = "kebab-case")]
pub enum PayoutSchedule {
    /// Principal compounds until the end of the period.
    #[default]
    Continuous,
    /// Growth is paid out periodically while the principal stays invested.
    Coupon {
        /// Interval between two coupon payments.
        every: PeriodUnit,
    },
}

/// Immutable input bundle for one calculation.
///
/// A request carries every quantity a pipeline could need; the invoking
/// caller chooses which pipeline to run, and that pipeline ignores the field
/// it solves for. The engine never infers which field is "unknown".
///
/// # Example
///
/// ```rust
/// use horizon_engine::CalculationRequest;
/// use horizon_core::types::PeriodUnit;
/// use rust_decimal_macros::dec;
///
/// let request = CalculationRequest::builder()
///     .present_value(dec!(1000))
///     .rate(dec!(0.01))
///     .period(12, PeriodUnit::Month)
///     .build();
/// assert!(!request.withholding);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Amount invested at the start of the horizon.
    #[serde(default)]
    pub present_value: Decimal,

    /// Target (or resulting) amount at the end of the horizon.
    #[serde(default)]
    pub future_value: Decimal,

    /// Amount contributed once per `period_unit`.
    #[serde(default)]
    pub contribution: Decimal,

    /// Number of `period_unit`s in the horizon.
    #[serde(default)]
    pub period: u32,

    /// Calendar granularity of `period`, `contribution`, and `rate`.
    #[serde(default)]
    pub period_unit: PeriodUnit,

    /// Nominal rate per `period_unit`, as a fraction (0.01 = 1%). Its
    /// interpretation depends on `rate_mode`.
    #[serde(default)]
    pub rate: Decimal,

    /// How `rate` combines with a benchmark index, if at all.
    #[serde(default)]
    pub rate_mode: RateMode,

    /// Whether investment income is taxed by the progressive
    /// holding-period table.
    #[serde(default)]
    pub withholding: bool,

    /// Continuous compounding or a discrete coupon schedule.
    #[serde(default)]
    pub payout: PayoutSchedule,
}

impl CalculationRequest {
    /// Creates a new request builder with all fields at their defaults.
    #[must_use]
    pub fn builder() -> CalculationRequestBuilder {
        CalculationRequestBuilder::default()
    }
}

/// Builder for [`CalculationRequest`].
#[derive(Debug, Clone, Default)]
pub struct CalculationRequestBuilder {
    present_value: Decimal,
    future_value: Decimal,
    contribution: Decimal,
    period: u32,
    period_unit: PeriodUnit,
    rate: Decimal,
    rate_mode: RateMode,
    withholding: bool,
    payout: PayoutSchedule,
}

impl CalculationRequestBuilder {
    /// Sets the present value.
    #[must_use]
    pub fn present_value(mut self, value: Decimal) -> Self {
        self.present_value = value;
        self
    }

    /// Sets the future value.
    #[must_use]
    pub fn future_value(mut self, value: Decimal) -> Self {
        self.future_value = value;
        self
    }

    /// Sets the per-unit contribution.
    #[must_use]
    pub fn contribution(mut self, value: Decimal) -> Self {
        self.contribution = value;
        self
    }

    /// Sets the period length and its unit.
    #[must_use]
    pub fn period(mut self, count: u32, unit: PeriodUnit) -> Self {
        self.period = count;
        self.period_unit = unit;
        self
    }

    /// Sets the period unit alone, for pipelines that solve for the period
    /// count itself.
    #[must_use]
    pub fn period_unit(mut self, unit: PeriodUnit) -> Self {
        self.period_unit = unit;
        self
    }

    /// Sets the nominal periodic rate.
    #[must_use]
    pub fn rate(mut self, value: Decimal) -> Self {
        self.rate = value;
        self
    }

    /// Sets the rate regime.
    #[must_use]
    pub fn rate_mode(mut self, mode: RateMode) -> Self {
        self.rate_mode = mode;
        self
    }

    /// Enables the progressive withholding tax.
    #[must_use]
    pub fn withholding(mut self, enabled: bool) -> Self {
        self.withholding = enabled;
        self
    }

    /// Requests a discrete coupon payout every `unit`.
    #[must_use]
    pub fn coupon_every(mut self, unit: PeriodUnit) -> Self {
        self.payout = PayoutSchedule::Coupon { every: unit };
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> CalculationRequest {
        CalculationRequest {
            present_value: self.present_value,
            future_value: self.future_value,
            contribution: self.contribution,
            period: self.period,
            period_unit: self.period_unit,
            rate: self.rate,
            rate_mode: self.rate_mode,
            withholding: self.withholding,
            payout: self.payout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_core::types::Benchmark;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let request = CalculationRequest::builder().build();
        assert_eq!(request.contribution, Decimal::ZERO);
        assert_eq!(request.rate_mode, RateMode::Fixed);
        assert_eq!(request.payout, PayoutSchedule::Continuous);
        assert!(!request.withholding);
    }

    #[test]
    fn test_builder_sets_fields() {
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .future_value(dec!(2000))
            .period(4, PeriodUnit::Quarter)
            .rate(dec!(0.03))
            .rate_mode(RateMode::Floating {
                benchmark: Benchmark::Cdi,
            })
            .withholding(true)
            .coupon_every(PeriodUnit::HalfYear)
            .build();

        assert_eq!(request.period, 4);
        assert_eq!(request.period_unit, PeriodUnit::Quarter);
        assert_eq!(request.rate_mode.benchmark(), Some(Benchmark::Cdi));
        assert_eq!(
            request.payout,
            PayoutSchedule::Coupon {
                every: PeriodUnit::HalfYear
            }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let request = CalculationRequest::builder()
            .present_value(dec!(500))
            .rate(dec!(0.012))
            .period(18, PeriodUnit::Month)
            .rate_mode(RateMode::Indexed {
                benchmark: Benchmark::Ipca,
            })
            .build();

        let json = serde_json::to_string(&request).unwrap();
        let back: CalculationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
