//! Error types for the Ratecraft library.
//!
//! Rates are validated once, at construction. Every failure, whether an
//! unknown kind or compounding name, a non-positive frequency, or a value
//! outside the representable domain, is reported as
//! [`RateError::InvalidArgument`].

use ratecraft_math::MathError;
use thiserror::Error;

/// A specialized Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;

/// The error type for rate construction and conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// An argument was not acceptable.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what was wrong.
        reason: String,
    },
}

impl RateError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns the reason attached to the error.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason } => reason,
        }
    }
}

impl From<MathError> for RateError {
    fn from(err: MathError) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = RateError::invalid_argument("unknown rate kind: foo");
        assert_eq!(err.to_string(), "Invalid argument: unknown rate kind: foo");
        assert_eq!(err.reason(), "unknown rate kind: foo");
    }

    #[test]
    fn test_math_error_becomes_invalid_argument() {
        let err: RateError = MathError::domain("ln", dec!(-0.5)).into();
        assert!(matches!(err, RateError::InvalidArgument { .. }));
        assert!(err.reason().contains("ln"));
    }
}
