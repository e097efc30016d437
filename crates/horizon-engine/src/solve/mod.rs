//! Solver pipelines.
//!
//! One pipeline per unknown quantity. Every pipeline shares the same shape:
//! a normalization prologue (resolve the effective monthly rate and monthly
//! contribution from the request), the pipeline-specific solve, and a
//! result-assembly epilogue (income decomposition, annual and real rates,
//! day counts, boundary rounding).

use rust_decimal::prelude::ToPrimitive;

use horizon_core::calendars::{Calendar, WeekendCalendar};
use horizon_core::types::{Benchmark, Date, PeriodUnit};

use crate::error::{EngineError, EngineResult};
use crate::rates;
use crate::request::CalculationRequest;
use crate::result::{self, CalculationResult};

mod contribution;
mod future_value;
mod period;
mod present_value;
mod rate;

pub use contribution::solve_contribution;
pub use future_value::solve_future_value;
pub use period::solve_period;
pub use present_value::solve_present_value;
pub use rate::solve_rate;

/// Request fields resolved to the engine's working granularity.
pub(crate) struct Normalized {
    pub present_value: f64,
    pub future_value: f64,
    /// Contribution per requested unit.
    pub contribution: f64,
    /// Contribution per month.
    pub monthly_contribution: f64,
    /// Effective monthly rate resolved through the rate regime.
    pub monthly_rate: f64,
    /// Nominal periodic rate as given, echoed into the result.
    pub nominal_rate: f64,
    /// Period length in months.
    pub period_months: f64,
    pub unit: PeriodUnit,
    pub withholding: bool,
}

impl Normalized {
    /// Resolves a request into working values, rejecting a non-positive
    /// effective rate (the period solver's logarithms and the coupon
    /// simulator's termination both require growth).
    pub(crate) fn from_request(request: &CalculationRequest) -> EngineResult<Self> {
        let present_value = decimal_input(request.present_value, "present_value")?;
        let future_value = decimal_input(request.future_value, "future_value")?;
        let contribution = decimal_input(request.contribution, "contribution")?;
        let nominal_rate = decimal_input(request.rate, "rate")?;

        let monthly_rate = rates::resolve_monthly(request.rate_mode, request.period_unit, nominal_rate);
        if monthly_rate <= 0.0 {
            return Err(EngineError::domain(format!(
                "effective monthly rate must be positive, got {monthly_rate}"
            )));
        }

        let months_per_unit = f64::from(request.period_unit.months());

        Ok(Self {
            present_value,
            future_value,
            contribution,
            monthly_contribution: contribution / months_per_unit,
            monthly_rate,
            nominal_rate,
            period_months: f64::from(request.period) * months_per_unit,
            unit: request.period_unit,
            withholding: request.withholding,
        })
    }
}

/// Converts a request field to `f64`, rejecting values outside its range.
pub(crate) fn decimal_input(
    value: rust_decimal::Decimal,
    context: &'static str,
) -> EngineResult<f64> {
    value.to_f64().ok_or_else(|| EngineError::non_finite(context))
}

/// Fully-computed pipeline outputs awaiting boundary conversion.
pub(crate) struct ResultParts {
    pub present_value: f64,
    pub future_value: f64,
    pub future_value_gross: f64,
    pub contribution: f64,
    /// Periodic rate echoed (or solved) in the request's unit.
    pub rate: f64,
    /// Echoed nominal rates reproduce the quote at 4 dp; a solved rate
    /// crosses the boundary at full precision.
    pub round_rate: bool,
    /// Effective monthly rate used for annualization.
    pub monthly_rate: f64,
    pub period_months: f64,
    pub unit: PeriodUnit,
    pub invested: f64,
    pub income: f64,
    /// Post-tax income; equals `income` when withholding is off.
    pub discounted_income: f64,
    /// Effective tier applied, when a single tier is meaningful.
    pub tax: Option<f64>,
    pub withholding: bool,
    pub coupon: Option<CouponFields>,
    pub converged: bool,
}

/// Coupon-specific result fields.
pub(crate) struct CouponFields {
    pub interval: PeriodUnit,
    pub payment_average: f64,
}

/// Builds the boundary result from computed parts.
///
/// The reference date anchors business-day arithmetic only; it plays no role
/// in tax tiering, which operates on the computed holding period itself.
pub(crate) fn assemble(parts: ResultParts, reference: Date) -> EngineResult<CalculationResult> {
    let annual_rate = rates::annualize(PeriodUnit::Month, parts.monthly_rate);
    let inflation = Benchmark::INFLATION.annual_rate();
    let real_annual_rate = rates::real_rate(annual_rate, inflation);
    let real_income = parts.discounted_income / (1.0 + inflation);

    let period_in_days = (parts.period_months * 30.0).floor() as i64;
    let calendar = WeekendCalendar;
    let period_in_business_days =
        calendar.business_days_between(reference, reference.add_days(period_in_days));

    let coupon_interval = parts.coupon.as_ref().map(|c| c.interval);
    let coupon_payment_average = parts
        .coupon
        .as_ref()
        .map(|c| result::money(c.payment_average, "coupon_payment_average"))
        .transpose()?;

    Ok(CalculationResult {
        present_value: result::money(parts.present_value, "present_value")?,
        future_value: result::money(parts.future_value, "future_value")?,
        future_value_gross: result::money(parts.future_value_gross, "future_value_gross")?,
        contribution: result::money(parts.contribution, "contribution")?,
        rate: if parts.round_rate {
            result::rate(parts.rate, "rate")?
        } else {
            result::precise_rate(parts.rate, "rate")?
        },
        annual_rate: result::rate(annual_rate, "annual_rate")?,
        real_annual_rate: result::rate(real_annual_rate, "real_annual_rate")?,
        period_unit: parts.unit,
        period_in_days,
        period_in_business_days,
        invested_amount: result::money(parts.invested, "invested_amount")?,
        income: result::money(parts.income, "income")?,
        discounted_income: parts
            .withholding
            .then(|| result::money(parts.discounted_income, "discounted_income"))
            .transpose()?,
        tax: parts
            .tax
            .filter(|_| parts.withholding)
            .map(|t| result::rate(t, "tax"))
            .transpose()?,
        real_income: result::money(real_income, "real_income")?,
        coupon_interval,
        coupon_payment_average,
        converged: parts.converged,
    })
}
