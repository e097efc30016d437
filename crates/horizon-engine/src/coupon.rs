//! Coupon schedule simulation.
//!
//! Instead of compounding until the end of the horizon, a coupon schedule
//! pays the growth out at a fixed interval while the principal stays
//! invested. The simulation runs the schedule forward until the accumulated
//! (optionally tax-adjusted) payout covers a target income.

use horizon_core::withholding;

use crate::error::{EngineError, EngineResult};

/// Hard bound on the number of simulated payments.
///
/// A monthly schedule runs for over 800 years before hitting this; inputs
/// that need more are rejected instead of looping unbounded.
const MAX_PAYMENTS: u32 = 10_000;

/// Outcome of a coupon schedule simulation.
#[derive(Debug, Clone, Copy)]
pub struct CouponOutcome {
    /// Accumulated payout after per-payment tax adjustment.
    pub discounted_total: f64,
    /// Accumulated payout before tax.
    pub gross_total: f64,
    /// Number of payments made.
    pub payments: u32,
    /// Total elapsed schedule length in months.
    pub elapsed_months: u32,
    /// Average gross payment (`gross_total / payments`).
    pub payment_average: f64,
}

/// Computes the size of one coupon payment.
///
/// The principal is compounded month by month for one interval; the payment
/// is the growth over the interval. Paid coupons do not reduce the
/// principal, so every payment in the schedule has this same size.
#[must_use]
pub fn payment_size(present_value: f64, monthly_rate: f64, interval_months: u32) -> f64 {
    let mut value = present_value;
    for _ in 0..interval_months {
        value += value * monthly_rate;
    }
    value - present_value
}

/// Runs the accumulation loop until the discounted payout reaches or
/// exceeds `target_income`.
///
/// When `withholding` is set, each payment is discounted by the tier the
/// running holding period has reached at that payment — later coupons can
/// be taxed less than earlier ones as the schedule crosses tier boundaries.
///
/// # Errors
///
/// Returns `EngineError::Domain` if `payment` or `target_income` is not
/// positive (the loop would not terminate), or if the schedule exceeds the
/// internal payment bound.
pub fn simulate(
    payment: f64,
    interval_months: u32,
    target_income: f64,
    withholding: bool,
) -> EngineResult<CouponOutcome> {
    if payment <= 0.0 {
        return Err(EngineError::domain(format!(
            "coupon payment must be positive, got {payment}"
        )));
    }
    if target_income <= 0.0 {
        return Err(EngineError::domain(format!(
            "coupon target income must be positive, got {target_income}"
        )));
    }

    let mut discounted_total = 0.0;
    let mut gross_total = 0.0;
    let mut payments: u32 = 0;
    let mut elapsed_months: u32 = 0;

    while discounted_total < target_income {
        if payments >= MAX_PAYMENTS {
            return Err(EngineError::domain(format!(
                "coupon schedule exceeded {MAX_PAYMENTS} payments before covering the target income"
            )));
        }

        elapsed_months += interval_months;

        let tax = if withholding {
            withholding::rate_for_holding_days(f64::from(elapsed_months) * 30.0)
        } else {
            0.0
        };

        discounted_total += payment - payment * tax;
        gross_total += payment;
        payments += 1;
    }

    Ok(CouponOutcome {
        discounted_total,
        gross_total,
        payments,
        elapsed_months,
        payment_average: gross_total / f64::from(payments),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payment_size_single_month() {
        // One month at 1% on 1000 pays 10.
        assert_relative_eq!(payment_size(1000.0, 0.01, 1), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_size_compounds_within_interval() {
        // A quarterly coupon at 1%/month pays the compounded growth,
        // not 3x the simple monthly growth.
        let payment = payment_size(1000.0, 0.01, 3);
        assert_relative_eq!(payment, 1000.0 * 1.01_f64.powi(3) - 1000.0, epsilon = 1e-9);
        assert!(payment > 30.0);
    }

    #[test]
    fn test_simulation_covers_target() {
        // Payment 50 against a target of 210: five payments, 250 gross.
        let outcome = simulate(50.0, 1, 210.0, false).unwrap();
        assert_eq!(outcome.payments, 5);
        assert_relative_eq!(outcome.gross_total, 250.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.discounted_total, 250.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.payment_average, 50.0, epsilon = 1e-12);
        assert_eq!(outcome.elapsed_months, 5);
    }

    #[test]
    fn test_simulation_stops_at_exact_target() {
        // 4 x 50 reaches 200 exactly; the loop must not run a fifth payment.
        let outcome = simulate(50.0, 1, 200.0, false).unwrap();
        assert_eq!(outcome.payments, 4);
        assert_relative_eq!(outcome.gross_total, 200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_withholding_steps_down_across_tiers() {
        // A half-year interval crosses the 180-day boundary immediately:
        // the first payment is taxed at 22.5%, the second at 20%.
        let outcome = simulate(100.0, 6, 150.0, true).unwrap();
        assert_eq!(outcome.payments, 2);
        assert_relative_eq!(
            outcome.discounted_total,
            100.0 * (1.0 - 0.225) + 100.0 * (1.0 - 0.20),
            epsilon = 1e-12
        );
        assert_relative_eq!(outcome.gross_total, 200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(simulate(0.0, 1, 100.0, false).is_err());
        assert!(simulate(-5.0, 1, 100.0, false).is_err());
        assert!(simulate(50.0, 1, 0.0, false).is_err());
        assert!(simulate(50.0, 1, -10.0, false).is_err());
    }

    #[test]
    fn test_payment_cap_enforced() {
        // A microscopic payment against a huge target trips the bound
        // instead of spinning.
        assert!(simulate(1e-9, 1, 1e12, false).is_err());
    }
}
