//! Contribution pipeline.

use horizon_core::types::Date;
use horizon_core::withholding;

use crate::error::{EngineError, EngineResult};
use crate::income;
use crate::request::CalculationRequest;
use crate::result::CalculationResult;

use super::{assemble, Normalized, ResultParts};

/// Solves for the periodic contribution that closes the gap between the
/// compounded principal and the future value target.
///
/// Inverts the annuity factor at monthly granularity:
///
/// `c = (fv - pv * (1+r)^n) / (((1+r)^n - 1) / r)`
///
/// and, when withholding applies, runs a second pass against the grossed-up
/// target so the solved contribution funds the pre-tax amount. The solved
/// contribution is denominated per month; use
/// [`horizon_core::types::PeriodUnit::convert_amount`] for other units.
///
/// The request's `contribution` field is ignored. `reference` anchors the
/// business-day count in the result.
pub fn solve_contribution(
    request: &CalculationRequest,
    reference: Date,
) -> EngineResult<CalculationResult> {
    if request.period == 0 {
        return Err(EngineError::domain(
            "contribution solving requires a positive period",
        ));
    }

    let n = Normalized::from_request(request)?;

    let growth = (1.0 + n.monthly_rate).powf(n.period_months);
    let annuity_factor = (growth - 1.0) / n.monthly_rate;

    let first_pass = (n.future_value - n.present_value * growth) / annuity_factor;

    let tax = withholding::rate_for_holding_days(n.period_months * 30.0);
    let applied_tax = if n.withholding { tax } else { 0.0 };

    let income = income::gross_income(
        n.future_value,
        n.period_months,
        first_pass,
        n.present_value,
        applied_tax,
    )?;

    let future_value_gross = n.present_value + n.period_months * first_pass + income;

    // Second pass against the pre-tax target.
    let contribution = (future_value_gross - n.present_value * growth) / annuity_factor;
    let invested = n.present_value + n.period_months * contribution;
    let discounted_income = income - income * applied_tax;

    assemble(
        ResultParts {
            present_value: n.present_value,
            future_value: n.future_value,
            future_value_gross,
            contribution,
            rate: n.nominal_rate,
            round_rate: true,
            monthly_rate: n.monthly_rate,
            period_months: n.period_months,
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
