//! Present value pipeline.

use horizon_core::types::Date;
use horizon_core::withholding;

use crate::error::EngineResult;
use crate::income;
use crate::request::CalculationRequest;
use crate::result::CalculationResult;

use super::{assemble, Normalized, ResultParts};

/// Solves for the present value from future value, rate, contribution, and
/// period.
///
/// Inverts the annuity form at monthly granularity:
///
/// `pv = (fv - c * ((1+r)^n - 1) / r) / (1+r)^n`
///
/// The request's `present_value` field is ignored. `reference` anchors the
/// business-day count in the result.
pub fn solve_present_value(
    request: &CalculationRequest,
    reference: Date,
) -> EngineResult<CalculationResult> {
    let n = Normalized::from_request(request)?;

    let growth = (1.0 + n.monthly_rate).powf(n.period_months);
    let present_value = (n.future_value
        - n.monthly_contribution * (growth - 1.0) / n.monthly_rate)
        / growth;

    let tax = withholding::rate_for_holding_days(n.period_months * 30.0);
    let applied_tax = if n.withholding { tax } else { 0.0 };

    let income = income::gross_income(
        n.future_value,
        n.period_months,
        n.monthly_contribution,
        present_value,
        applied_tax,
    )?;

    let invested = present_value + n.period_months * n.monthly_contribution;
    let future_value_gross = invested + income;
    let discounted_income = income - income * applied_tax;

    assemble(
        ResultParts {
            present_value,
            future_value: n.future_value,
            future_value_gross,
            contribution: n.contribution,
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
