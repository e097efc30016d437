//! Progressive withholding tax on investment income.
//!
//! The withholding rate regresses with the holding period: the longer the
//! investment is held, the smaller the slice of its income that is withheld.
//! The tier table is process-wide constant data; there is no runtime
//! mutation path.

/// Upper bound of each tier in holding days (inclusive) and its rate.
const TIERS: [(f64, f64); 3] = [(180.0, 0.225), (360.0, 0.20), (720.0, 0.175)];

/// Rate applied beyond the last tier boundary.
const LONG_HOLD_RATE: f64 = 0.15;

/// Returns the withholding rate for a holding period, as a fraction.
///
/// Tier boundaries are inclusive on their upper bound:
///
/// | Holding period | Rate |
/// |---|---|
/// | up to 180 days | 22.5% |
/// | 181 to 360 days | 20.0% |
/// | 361 to 720 days | 17.5% |
/// | 721 days and beyond | 15.0% |
///
/// The input is the computed holding period itself, never wall-clock time;
/// the function is pure and total.
#[must_use]
pub fn rate_for_holding_days(days: f64) -> f64 {
    for (bound, rate) in TIERS {
        if days <= bound {
            return rate;
        }
    }
    LONG_HOLD_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert!((rate_for_holding_days(180.0) - 0.225).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(181.0) - 0.20).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(360.0) - 0.20).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(361.0) - 0.175).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(720.0) - 0.175).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(721.0) - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_and_long_extremes() {
        assert!((rate_for_holding_days(0.0) - 0.225).abs() < f64::EPSILON);
        assert!((rate_for_holding_days(10_000.0) - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_days() {
        // A 6.01-month holding (180.3 days) already falls in the second tier.
        assert!((rate_for_holding_days(180.3) - 0.20).abs() < f64::EPSILON);
    }
}
