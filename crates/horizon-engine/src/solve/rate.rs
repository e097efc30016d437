//! Rate pipeline.

use log::{debug, warn};

use horizon_core::types::Date;
use horizon_core::withholding;
use horizon_math::solvers::{newton_raphson, SolverConfig};

use crate::error::{EngineError, EngineResult};
use crate::income;
use crate::rates;
use crate::request::CalculationRequest;
use crate::result::CalculationResult;

use super::{assemble, decimal_input, ResultParts};

/// Starting estimate for the periodic rate.
const INITIAL_GUESS: f64 = 0.01;

/// Below this magnitude the annuity derivative's `rate²` division is
/// surfaced as a vanishing derivative so the solver rejects the iterate.
const RATE_FLOOR: f64 = 1e-15;

/// Solves for the periodic rate from present value, future value,
/// contribution, and period.
///
/// Newton-Raphson on `f(r) = FV(r) - target`, where
///
/// `FV(r) = pv * (1+r)^n + c * ((1+r)^n - 1) / r`
///
/// and the target is the future value grossed up by the withholding tier of
/// the full period. Iterations stop when the step falls below 1e-10; an
/// exhausted budget (1000 iterations) returns the last estimate with
/// `converged = false` instead of failing.
///
/// The solved rate is periodic in the request's `period_unit`; the request's
/// `rate` and `rate_mode` fields are ignored. `reference` anchors the
/// business-day count in the result.
pub fn solve_rate(request: &CalculationRequest, reference: Date) -> EngineResult<CalculationResult> {
    if request.period == 0 {
        return Err(EngineError::domain("rate solving requires a positive period"));
    }

    let present_value = decimal_input(request.present_value, "present_value")?;
    let future_value = decimal_input(request.future_value, "future_value")?;
    let contribution = decimal_input(request.contribution, "contribution")?;

    let periods = f64::from(request.period);
    let period_months = periods * f64::from(request.period_unit.months());

    let tax = withholding::rate_for_holding_days(period_months * 30.0);
    let applied_tax = if request.withholding { tax } else { 0.0 };

    // Gross up the target so the solved rate funds the pre-tax amount.
    let grossing_income = income::gross_income(
        future_value,
        periods,
        contribution,
        present_value,
        applied_tax,
    )?;
    let target = periods * contribution + present_value + grossing_income;

    let f = |r: f64| compounded_value(present_value, contribution, periods, r) - target;
    let df = |r: f64| compounded_value_derivative(present_value, contribution, periods, r);

    let solved = newton_raphson(f, df, INITIAL_GUESS, &SolverConfig::default())?;
    debug!(
        "rate solve finished in {} iterations (residual {:.2e})",
        solved.iterations, solved.residual
    );
    if !solved.converged {
        warn!(
            "rate solve exhausted its iteration budget; returning last estimate {:.6}",
            solved.root
        );
    }

    let rate = solved.root;
    let monthly_rate = rates::effective_monthly(request.period_unit, rate);

    let mut income = income::gross_income(future_value, periods, contribution, present_value, 0.0)?;
    if request.withholding {
        income /= 1.0 - tax;
    }

    let invested = present_value + periods * contribution;
    let future_value_gross = invested + income;
    let discounted_income = income - income * applied_tax;

    assemble(
        ResultParts {
            present_value,
            future_value,
            future_value_gross,
            contribution,
            rate,
            round_rate: false,
            monthly_rate,
            period_months,
            unit: request.period_unit,
            invested,
            income,
            discounted_income,
            tax: Some(tax),
            withholding: request.withholding,
            coupon: None,
            converged: solved.converged,
        },
        reference,
    )
}

/// Future value of principal plus an in-arrears contribution stream at a
/// candidate periodic rate.
fn compounded_value(pv: f64, contribution: f64, periods: f64, rate: f64) -> f64 {
    let growth = (1.0 + rate).powf(periods);
    if contribution == 0.0 {
        pv * growth
    } else {
        pv * growth + contribution * (growth - 1.0) / rate
    }
}

/// Closed-form derivative of [`compounded_value`] with respect to the rate.
fn compounded_value_derivative(pv: f64, contribution: f64, periods: f64, rate: f64) -> f64 {
    let base = 1.0 + rate;
    let principal_term = pv * periods * base.powf(periods - 1.0);

    if contribution == 0.0 {
        return principal_term;
    }
    if rate.abs() < RATE_FLOOR {
        // The annuity term divides by rate²; force a division-by-zero
        // rejection upstream rather than producing NaN.
        return 0.0;
    }

    let growth = base.powf(periods);
    principal_term
        + contribution * (periods * base.powf(periods - 1.0) * rate - (growth - 1.0))
            / (rate * rate)
}
