//! Unified error types for the calculation engine.
//!
//! This module consolidates the errors raised by the solver pipelines and
//! wraps the errors of the lower layers.

use horizon_core::CoreError;
use horizon_math::MathError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for all engine operations.
///
/// A pipeline either returns a complete [`crate::CalculationResult`] or one
/// of these; there are no partial results.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A mathematically invalid configuration was supplied.
    #[error("domain error: {0}")]
    Domain(String),

    /// A computation produced a non-finite value that cannot cross the
    /// result boundary.
    #[error("non-finite value in {0}")]
    NonFinite(String),

    /// Error from the core layer (dates, units, calendars).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the numerical layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl EngineError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain(reason.into())
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite(context.into())
    }
}
