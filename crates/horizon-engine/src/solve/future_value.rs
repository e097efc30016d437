//! Future value pipeline.

use horizon_core::types::Date;
use horizon_core::withholding;

use crate::error::EngineResult;
use crate::income;
use crate::request::CalculationRequest;
use crate::result::CalculationResult;

use super::{assemble, Normalized, ResultParts};

/// Solves for the future value from present value, rate, contribution, and
/// period.
///
/// The closed annuity form at monthly granularity:
///
/// `fv = pv * (1+r)^n + c * ((1+r)^n - 1) / r`
///
/// The request's `future_value` field is ignored. `reference` anchors the
/// business-day count in the result.
pub fn solve_future_value(
    request: &CalculationRequest,
    reference: Date,
) -> EngineResult<CalculationResult> {
    let n = Normalized::from_request(request)?;

    let growth = (1.0 + n.monthly_rate).powf(n.period_months);
    let future_value = n.present_value * growth
        + n.monthly_contribution * (growth - 1.0) / n.monthly_rate;

    let invested = n.present_value + n.period_months * n.monthly_contribution;

    let tax = withholding::rate_for_holding_days(n.period_months * 30.0);
    let applied_tax = if n.withholding { tax } else { 0.0 };

    let income = income::gross_income(
        future_value,
        n.period_months,
        n.monthly_contribution,
        n.present_value,
        applied_tax,
    )?;

    let future_value_gross = invested + income;
    let discounted_income = income - income * applied_tax;

    assemble(
        ResultParts {
            present_value: n.present_value,
            future_value,
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

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_core::types::PeriodUnit;
    use rust_decimal_macros::dec;

    fn reference() -> Date {
        Date::from_ymd(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_fixed_monthly_growth() {
        // 1000 at 1%/month for 12 months is 1000 * 1.01^12.
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .rate(dec!(0.01))
            .period(12, PeriodUnit::Month)
            .build();

        let result = solve_future_value(&request, reference()).unwrap();
        assert_eq!(result.future_value.to_string(), "1126.83");
        assert_eq!(result.invested_amount.to_string(), "1000.00");
        assert_eq!(result.income.to_string(), "126.83");
        assert!(result.converged);
    }

    #[test]
    fn test_contributions_accumulate() {
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .contribution(dec!(100))
            .rate(dec!(0.01))
            .period(12, PeriodUnit::Month)
            .build();

        let result = solve_future_value(&request, reference()).unwrap();
        // 12 monthly contributions of 100 on top of the principal.
        assert_eq!(result.invested_amount.to_string(), "2200.00");
        // fv = 1126.83 + 100 * (1.01^12 - 1) / 0.01 = 2395.08
        assert_eq!(result.future_value.to_string(), "2395.08");
    }

    #[test]
    fn test_withholding_grosses_up_income() {
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .rate(dec!(0.01))
            .period(12, PeriodUnit::Month)
            .withholding(true)
            .build();

        let result = solve_future_value(&request, reference()).unwrap();
        // 360 days of holding lands in the 20% tier.
        assert_eq!(result.tax.unwrap().to_string(), "0.2000");
        // income is grossed up, so pre-tax exceeds the net target.
        assert!(result.future_value_gross > result.future_value);
        assert!(result.discounted_income.is_some());
    }

    #[test]
    fn test_quarterly_unit_matches_monthly_equivalent() {
        // 4 quarters at the quarterly equivalent of 1%/month matches
        // 12 months at 1%/month.
        let quarterly_rate = 1.01_f64.powi(3) - 1.0;
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .rate(rust_decimal::Decimal::from_f64_retain(quarterly_rate).unwrap())
            .period(4, PeriodUnit::Quarter)
            .build();

        let result = solve_future_value(&request, reference()).unwrap();
        assert_eq!(result.future_value.to_string(), "1126.83");
        assert_eq!(result.period_in_days, 360);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let request = CalculationRequest::builder()
            .present_value(dec!(1000))
            .period(12, PeriodUnit::Month)
            .build();

        assert!(solve_future_value(&request, reference()).is_err());
    }
}
