//! Rate normalization across calendar units and rate regimes.
//!
//! The engine solves at monthly granularity; every nominal rate, whatever
//! unit it was quoted over, is first converted to an equivalent effective
//! monthly rate. Benchmark-linked regimes resolve their index level from the
//! constant table in `horizon_core` and combine it with the quoted rate
//! before normalization.

use horizon_core::types::{PeriodUnit, RateMode};

/// Converts a rate nominally expressed over `unit` into the equivalent
/// effective monthly compounding rate.
///
/// # Formula
///
/// `(1 + nominal)^(1 / months_in_unit) - 1`
#[must_use]
pub fn effective_monthly(unit: PeriodUnit, nominal: f64) -> f64 {
    (1.0 + nominal).powf(1.0 / f64::from(unit.months())) - 1.0
}

/// Converts a rate nominally expressed over `unit` into the equivalent
/// effective daily compounding rate, for day-granular schedules.
///
/// # Formula
///
/// `(1 + nominal)^(1 / days_in_unit) - 1`
#[must_use]
pub fn effective_daily(unit: PeriodUnit, nominal: f64) -> f64 {
    (1.0 + nominal).powf(1.0 / unit.days()) - 1.0
}

/// Converts a rate nominally expressed over `unit` into the equivalent
/// effective annual rate, compounding through the monthly equivalent.
///
/// # Formula
///
/// `(1 + monthly)^12 - 1`
#[must_use]
pub fn annualize(unit: PeriodUnit, nominal: f64) -> f64 {
    (1.0 + effective_monthly(unit, nominal)).powf(12.0) - 1.0
}

/// Deflates a nominal annual rate by an inflation rate (Fisher relation).
///
/// # Formula
///
/// `(1 + nominal) / (1 + inflation) - 1`
#[must_use]
pub fn real_rate(nominal_annual: f64, inflation_annual: f64) -> f64 {
    (1.0 + nominal_annual) / (1.0 + inflation_annual) - 1.0
}

/// Compounds two rates of the same granularity into one.
///
/// # Formula
///
/// `(1 + a)(1 + b) - 1`
#[must_use]
pub fn compound(a: f64, b: f64) -> f64 {
    (1.0 + a) * (1.0 + b) - 1.0
}

/// Resolves a request's nominal rate into the effective monthly rate the
/// pipelines compute with.
///
/// The benchmark's annual level is normalized to monthly before it is
/// combined:
///
/// - `Fixed`: the nominal rate converted as-is
/// - `Floating`: nominal is a multiplier on the monthly benchmark rate
/// - `Indexed`: nominal is a spread compounded on the monthly benchmark rate
#[must_use]
pub fn resolve_monthly(mode: RateMode, unit: PeriodUnit, nominal: f64) -> f64 {
    match mode {
        RateMode::Fixed => effective_monthly(unit, nominal),
        RateMode::Floating { benchmark } => {
            nominal * effective_monthly(PeriodUnit::Year, benchmark.annual_rate())
        }
        RateMode::Indexed { benchmark } => compound(
            effective_monthly(unit, nominal),
            effective_monthly(PeriodUnit::Year, benchmark.annual_rate()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use horizon_core::types::Benchmark;

    #[test]
    fn test_effective_monthly_from_annual() {
        // 12% a year is just under 1% a month.
        let monthly = effective_monthly(PeriodUnit::Year, 0.12);
        assert_relative_eq!(monthly, 1.12_f64.powf(1.0 / 12.0) - 1.0, epsilon = 1e-15);
        assert!(monthly < 0.01);
    }

    #[test]
    fn test_effective_monthly_is_identity_for_month() {
        assert_relative_eq!(effective_monthly(PeriodUnit::Month, 0.01), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_effective_daily_compounds_back_over_a_year() {
        let daily = effective_daily(PeriodUnit::Year, 0.12);
        assert_relative_eq!((1.0 + daily).powf(365.0) - 1.0, 0.12, epsilon = 1e-12);
        assert!(daily < effective_monthly(PeriodUnit::Year, 0.12));
    }

    #[test]
    fn test_annualize_inverts_year_normalization() {
        // Annualizing a rate that was quoted annually reproduces it.
        assert_relative_eq!(annualize(PeriodUnit::Year, 0.12), 0.12, epsilon = 1e-12);
        // ... and so does annualizing the monthly equivalent.
        let monthly = effective_monthly(PeriodUnit::Year, 0.12);
        assert_relative_eq!(annualize(PeriodUnit::Month, monthly), 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_real_rate_fisher() {
        let real = real_rate(0.10, 0.0405);
        assert_relative_eq!(real, 1.10 / 1.0405 - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_compound_is_symmetric() {
        assert_relative_eq!(compound(0.01, 0.02), compound(0.02, 0.01), epsilon = 1e-15);
        assert_relative_eq!(compound(0.01, 0.0), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_resolve_fixed() {
        let rate = resolve_monthly(RateMode::Fixed, PeriodUnit::Year, 0.12);
        assert_relative_eq!(rate, effective_monthly(PeriodUnit::Year, 0.12), epsilon = 1e-15);
    }

    #[test]
    fn test_resolve_floating_scales_benchmark() {
        let benchmark_monthly = effective_monthly(PeriodUnit::Year, Benchmark::Cdi.annual_rate());
        let rate = resolve_monthly(
            RateMode::Floating {
                benchmark: Benchmark::Cdi,
            },
            PeriodUnit::Month,
            1.1,
        );
        assert_relative_eq!(rate, 1.1 * benchmark_monthly, epsilon = 1e-15);
    }

    #[test]
    fn test_resolve_indexed_compounds_spread() {
        let benchmark_monthly = effective_monthly(PeriodUnit::Year, Benchmark::Ipca.annual_rate());
        let spread_monthly = effective_monthly(PeriodUnit::Year, 0.06);
        let rate = resolve_monthly(
            RateMode::Indexed {
                benchmark: Benchmark::Ipca,
            },
            PeriodUnit::Year,
            0.06,
        );
        assert_relative_eq!(rate, compound(spread_monthly, benchmark_monthly), epsilon = 1e-15);
        // Indexed is strictly richer than either leg alone.
        assert!(rate > spread_monthly);
        assert!(rate > benchmark_monthly);
    }
}
