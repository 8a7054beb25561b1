//! Error types for mathematical operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Argument outside the domain of the function.
    #[error("Domain error in {operation}: {value} is outside the domain")]
    Domain {
        /// The function that rejected the argument.
        operation: String,
        /// The offending argument.
        value: Decimal,
    },

    /// Iterative refinement failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Size of the last step.
        residual: Decimal,
    },

    /// Division by zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that divided by zero.
        operation: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Result does not fit in a `Decimal`.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that caused overflow.
        operation: String,
    },
}

impl MathError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(operation: impl Into<String>, value: Decimal) -> Self {
        Self::Domain {
            operation: operation.into(),
            value,
        }
    }

    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: Decimal) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}
