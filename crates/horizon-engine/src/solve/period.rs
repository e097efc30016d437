//! Period pipeline.

use log::debug;

use horizon_core::types::{Date, PeriodUnit};
use horizon_core::withholding;

use crate::coupon;
use crate::error::{EngineError, EngineResult};
use crate::income;
use crate::request::{CalculationRequest, PayoutSchedule};
use crate::result::CalculationResult;

use super::{assemble, CouponFields, Normalized, ResultParts};

/// Solves for the period from present value, future value, rate, and
/// contribution.
///
/// The closed logarithmic form at monthly granularity:
///
/// `n = ln((fv + c/r) / (pv + c/r)) / ln(1 + r)`
///
/// The withholding tier depends on the holding period, which is what is
/// being solved, so the pipeline runs exactly two passes: the first solves
/// untaxed and fixes the tier, the second re-solves against the grossed-up
/// target. This is a deliberate two-iteration refinement, not a fixed-point
/// loop.
///
/// When the request carries a coupon schedule, period solving is replaced by
/// the schedule simulation: the horizon is however long the coupons take to
/// pay out the targeted appreciation.
///
/// The request's `period` field is ignored. `reference` anchors the
/// business-day count in the result.
pub fn solve_period(request: &CalculationRequest, reference: Date) -> EngineResult<CalculationResult> {
    let n = Normalized::from_request(request)?;

    if let PayoutSchedule::Coupon { every } = request.payout {
        return solve_with_coupons(&n, every, reference);
    }

    // Pass 1: untaxed solve fixes the withholding tier.
    let first_months = months_for_target(
        n.future_value,
        n.present_value,
        n.monthly_contribution,
        n.monthly_rate,
    )?;

    let tax = withholding::rate_for_holding_days(first_months * 30.0);
    let applied_tax = if n.withholding { tax } else { 0.0 };

    let first_units = whole_units(first_months, n.unit);
    let first_income = income::gross_income(
        n.future_value,
        first_units,
        n.contribution,
        n.present_value,
        applied_tax,
    )?;
    let gross_target = first_units * n.contribution + n.present_value + first_income;

    // Pass 2: re-solve against the pre-tax target.
    let months = months_for_target(
        gross_target,
        n.present_value,
        n.monthly_contribution,
        n.monthly_rate,
    )?;
    debug!("period solve refined {first_months} -> {months} months (tier {tax})");

    let units = whole_units(months, n.unit);
    let mut income =
        income::gross_income(n.future_value, units, n.contribution, n.present_value, 0.0)?;
    if n.withholding {
        income /= 1.0 - tax;
    }

    let invested = n.present_value + units * n.contribution;
    let discounted_income = income - income * applied_tax;
    let future_value_gross = invested + income;

    assemble(
        ResultParts {
            present_value: n.present_value,
            future_value: n.future_value,
            future_value_gross,
            contribution: n.contribution,
            rate: n.nominal_rate,
            round_rate: true,
            monthly_rate: n.monthly_rate,
            period_months: months,
            unit: n.unit,
            invested,
            income,
            discounted_income,
            tax: Some(tax),
            withholding: n.withholding,
            coupon: None,
            converged: true,
        },
        reference,
    )
}

/// Closed-form period solve in months, rounded to 2 decimals as the
/// intermediate granularity.
fn months_for_target(
    future_value: f64,
    present_value: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
) -> EngineResult<f64> {
    let offset = monthly_contribution / monthly_rate;
    let numerator = future_value + offset;
    let denominator = present_value + offset;

    if numerator <= 0.0 || denominator <= 0.0 {
        return Err(EngineError::domain(format!(
            "period solve requires positive log operands, got {numerator} / {denominator}"
        )));
    }

    let months = (numerator / denominator).ln() / (1.0 + monthly_rate).ln();
    Ok((months * 100.0).round() / 100.0)
}

/// Rounds a month count up to whole requested units.
fn whole_units(months: f64, unit: PeriodUnit) -> f64 {
    (months / f64::from(unit.months())).ceil()
}

/// Coupon branch: the period is however long the schedule takes to pay the
/// targeted appreciation out.
fn solve_with_coupons(
    n: &Normalized,
    every: PeriodUnit,
    reference: Date,
) -> EngineResult<CalculationResult> {
    let target_income = n.future_value - n.present_value;
    let payment = coupon::payment_size(n.present_value, n.monthly_rate, every.months());
    let outcome = coupon::simulate(payment, every.months(), target_income, n.withholding)?;

    let future_value = outcome.discounted_total + n.present_value;
    let future_value_gross = outcome.gross_total + n.present_value;

    assemble(
        ResultParts {
            present_value: n.present_value,
            future_value,
            future_value_gross,
            contribution: n.contribution,
            rate: n.nominal_rate,
            round_rate: true,
            monthly_rate: n.monthly_rate,
            period_months: f64::from(outcome.elapsed_months),
            unit: n.unit,
            invested: n.present_value,
            income: outcome.gross_total,
            discounted_income: outcome.discounted_total,
            tax: None,
            withholding: n.withholding,
            coupon: Some(CouponFields {
                interval: every,
                payment_average: outcome.payment_average,
            }),
            converged: true,
        },
        reference,
    )
}
