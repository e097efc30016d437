//! Error types for the Horizon core library.
//!
//! This module defines the error types used by the foundational layer,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Horizon core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for Horizon core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An unrecognized period or coupon unit was supplied.
    #[error("Invalid period unit: {value}")]
    InvalidUnit {
        /// The unrecognized unit string.
        value: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    Calendar {
        /// Description of the error.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid unit error.
    #[must_use]
    pub fn invalid_unit(value: impl Into<String>) -> Self {
        Self::InvalidUnit {
            value: value.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::Calendar {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_invalid_unit_display() {
        let err = CoreError::invalid_unit("fortnight");
        assert!(err.to_string().contains("fortnight"));
    }
}
