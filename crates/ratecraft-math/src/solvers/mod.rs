//! Iterative solvers in decimal arithmetic.
//!
//! - [`nth_root`]: Newton-Raphson n-th root, used to invert compounding
//!   (`(1 + i)^(1/n)`) without losing precision through `ln`/`exp`.

mod newton;

pub use newton::nth_root;

use rust_decimal::Decimal;

/// Default relative tolerance for decimal solvers.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 26);

/// Default maximum iterations for decimal solvers.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for decimal root solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Relative step size below which the iteration has converged.
    pub tolerance: Decimal,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RootConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: Decimal, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
