//! Calculation result model.
//!
//! Pipelines compute in full `f64` precision and cross into `Decimal` here,
//! at the boundary only: monetary amounts are rounded to 2 decimal places
//! and rate echoes to 4. A non-finite value is rejected at this point rather
//! than serialized.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use horizon_core::types::PeriodUnit;

use crate::error::{EngineError, EngineResult};

/// Output bundle of a solver pipeline.
///
/// Every field is fully resolved; a pipeline either produces all of them or
/// fails. `discounted_income` and `tax` are present only when withholding
/// was enabled, the `coupon_*` fields only when a coupon schedule was
/// simulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Amount invested at the start of the horizon.
    pub present_value: Decimal,

    /// Net amount at the end of the horizon.
    pub future_value: Decimal,

    /// Pre-tax amount at the end of the horizon (invested + gross income).
    pub future_value_gross: Decimal,

    /// Periodic contribution (see the pipeline docs for its denomination).
    pub contribution: Decimal,

    /// Periodic rate per `period_unit`, as a fraction.
    pub rate: Decimal,

    /// Effective annual rate implied by the monthly rate.
    pub annual_rate: Decimal,

    /// `annual_rate` deflated by the inflation benchmark (Fisher relation).
    pub real_annual_rate: Decimal,

    /// Calendar granularity the request was denominated in.
    pub period_unit: PeriodUnit,

    /// Horizon length in calendar days (30-day banking months).
    pub period_in_days: i64,

    /// Business days in the horizon window, counted from the injected
    /// reference date on the weekend-only calendar.
    pub period_in_business_days: i64,

    /// Principal plus all contributions.
    pub invested_amount: Decimal,

    /// Gross income over the horizon.
    pub income: Decimal,

    /// Post-tax income. Present only when withholding was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_income: Option<Decimal>,

    /// Effective withholding rate applied, as a fraction. Present only when
    /// withholding was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,

    /// Post-tax income deflated by the inflation benchmark.
    pub real_income: Decimal,

    /// Coupon payment interval, when a schedule was simulated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_interval: Option<PeriodUnit>,

    /// Average coupon payment, when a schedule was simulated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_payment_average: Option<Decimal>,

    /// False when the rate solver exhausted its iteration budget and the
    /// rate is its last estimate rather than a converged root.
    pub converged: bool,
}

/// Converts a monetary amount to its boundary representation (2 dp).
pub(crate) fn money(value: f64, context: &'static str) -> EngineResult<Decimal> {
    scaled(value, 2, context)
}

/// Converts a rate to its boundary representation (4 dp).
pub(crate) fn rate(value: f64, context: &'static str) -> EngineResult<Decimal> {
    scaled(value, 4, context)
}

fn scaled(value: f64, dp: u32, context: &'static str) -> EngineResult<Decimal> {
    let mut amount = Decimal::from_f64(value)
        .ok_or_else(|| EngineError::non_finite(context))?
        .round_dp(dp);
    // Pin the scale so 10 reads as 10.00, matching the rounded fields.
    amount.rescale(dp);
    Ok(amount)
}

/// Converts a solved rate without rounding; the solver's full precision is
/// part of its contract.
pub(crate) fn precise_rate(value: f64, context: &'static str) -> EngineResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| EngineError::non_finite(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(money(1126.8251_f64, "fv").unwrap().to_string(), "1126.83");
        assert_eq!(money(0.004_f64, "fv").unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_rate_rounds_to_four_places() {
        assert_eq!(rate(0.104_f64, "rate").unwrap().to_string(), "0.1040");
        assert_eq!(rate(0.010051_f64, "rate").unwrap().to_string(), "0.0101");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(money(f64::NAN, "fv").is_err());
        assert!(money(f64::INFINITY, "fv").is_err());
        assert!(rate(f64::NEG_INFINITY, "rate").is_err());
    }
}
