//! Rate regimes and benchmark indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named external reference index.
///
/// Benchmark levels are process-wide constants resolved through
/// [`Benchmark::annual_rate`]; they are never computed or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Benchmark {
    /// Interbank deposit rate (overnight benchmark).
    Cdi,
    /// Central bank policy rate.
    Selic,
    /// Consumer price inflation index.
    Ipca,
}

impl Benchmark {
    /// The index used to deflate nominal results into real terms.
    pub const INFLATION: Benchmark = Benchmark::Ipca;

    /// Returns the benchmark's annual rate as a fraction.
    #[must_use]
    pub fn annual_rate(&self) -> f64 {
        match self {
            Benchmark::Cdi => 0.104,
            Benchmark::Selic => 0.105,
            Benchmark::Ipca => 0.0405,
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Benchmark::Cdi => "CDI",
            Benchmark::Selic => "SELIC",
            Benchmark::Ipca => "IPCA",
        };
        write!(f, "{name}")
    }
}

/// How the nominal rate of a request is to be interpreted.
///
/// The benchmark only exists in the variants that use one, so a floating or
/// indexed rate without a reference index is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum RateMode {
    /// The rate applies as-is.
    #[default]
    Fixed,
    /// The rate is a multiplier on a benchmark rate (e.g. 1.1 = 110% of CDI).
    Floating {
        /// The reference index the multiplier applies to.
        benchmark: Benchmark,
    },
    /// The rate is a spread compounded on top of a benchmark rate.
    Indexed {
        /// The reference index the spread compounds over.
        benchmark: Benchmark,
    },
}

impl RateMode {
    /// Returns the benchmark referenced by this mode, if any.
    #[must_use]
    pub fn benchmark(&self) -> Option<Benchmark> {
        match self {
            RateMode::Fixed => None,
            RateMode::Floating { benchmark } | RateMode::Indexed { benchmark } => Some(*benchmark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_table() {
        assert!((Benchmark::Cdi.annual_rate() - 0.104).abs() < f64::EPSILON);
        assert!((Benchmark::Selic.annual_rate() - 0.105).abs() < f64::EPSILON);
        assert!((Benchmark::Ipca.annual_rate() - 0.0405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inflation_index() {
        assert_eq!(Benchmark::INFLATION, Benchmark::Ipca);
    }

    #[test]
    fn test_mode_benchmark_access() {
        assert_eq!(RateMode::Fixed.benchmark(), None);
        let mode = RateMode::Floating {
            benchmark: Benchmark::Cdi,
        };
        assert_eq!(mode.benchmark(), Some(Benchmark::Cdi));
    }

    #[test]
    fn test_serde_tagged() {
        let mode = RateMode::Indexed {
            benchmark: Benchmark::Ipca,
        };
        let json = serde_json::to_string(&mode).unwrap();
        assert!(json.contains("\"mode\":\"indexed\""));
        assert!(json.contains("\"benchmark\":\"ipca\""));
        let back: RateMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}
