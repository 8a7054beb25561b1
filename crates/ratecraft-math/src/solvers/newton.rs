//! Newton-Raphson n-th root.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};
use crate::functions::powi;
use crate::solvers::RootConfig;

/// Computes the positive n-th root of `x` with Newton-Raphson.
///
/// Solves `y^n - x = 0` using the iteration:
/// `y_{k+1} = ((n - 1) * y_k + x / y_k^(n-1)) / n`
///
/// The iteration is seeded from an `f64` estimate, so only a handful of
/// steps are needed to reach full decimal precision.
/// It stops once the step is within `config.tolerance` relative to the
/// root, or once the step stops shrinking: small radicands carry fewer
/// significant digits at `Decimal`'s fixed 28 places, and past that point
/// the iterate only oscillates in its last digit.
///
/// # Arguments
///
/// * `x` - The radicand, must be positive
/// * `n` - The degree of the root, must be at least 1
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use ratecraft_math::solvers::{nth_root, RootConfig};
/// use rust_decimal_macros::dec;
///
/// let root = nth_root(dec!(1.1586504150390625), 4, &RootConfig::default()).unwrap();
/// assert_eq!(root.round_dp(20), dec!(1.0375));
/// ```
pub fn nth_root(x: Decimal, n: u32, config: &RootConfig) -> MathResult<Decimal> {
    if n == 0 {
        return Err(MathError::invalid_input("root degree must be at least 1"));
    }
    if x <= Decimal::ZERO {
        return Err(MathError::domain("nth_root", x));
    }
    if n == 1 || x == Decimal::ONE {
        return Ok(x);
    }

    let degree = Decimal::from(n);
    let degree_less_one = degree - Decimal::ONE;
    let overflow = || MathError::overflow("nth_root");

    let mut y = initial_guess(x, n);
    let mut previous_step: Option<Decimal> = None;

    for iteration in 0..config.max_iterations {
        let y_pow = powi(y, u64::from(n - 1))?;
        if y_pow.is_zero() {
            return Err(MathError::division_by_zero("nth_root"));
        }

        let quotient = x.checked_div(y_pow).ok_or_else(overflow)?;
        let next = degree_less_one
            .checked_mul(y)
            .and_then(|scaled| scaled.checked_add(quotient))
            .and_then(|sum| sum.checked_div(degree))
            .ok_or_else(overflow)?;

        let step = (next - y).abs();
        let settled = previous_step.is_some_and(|previous| step >= previous);
        y = next;

        if step <= config.tolerance * y {
            log::trace!("nth_root({x}, {n}) converged after {} iterations", iteration + 1);
            return Ok(y);
        }

        // Newton shrinks the step quadratically until it reaches the last
        // digits `x / y^(n-1)` can carry. A step that no longer shrinks is
        // rounding noise, so the current iterate is as close as Decimal gets.
        if settled {
            log::trace!(
                "nth_root({x}, {n}) settled at precision limit after {} iterations (step {step})",
                iteration + 1
            );
            return Ok(y);
        }
        previous_step = Some(step);
    }

    let residual = (powi(y, u64::from(n))? - x).abs();
    log::debug!(
        "nth_root({x}, {n}) did not converge in {} iterations",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, residual))
}

fn initial_guess(x: Decimal, n: u32) -> Decimal {
    x.to_f64()
        .map(|value| value.powf(1.0 / f64::from(n)))
        .filter(|guess| guess.is_finite() && *guess > 0.0)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::round_half_up;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_square_root() {
        let root = nth_root(dec!(2), 2, &RootConfig::default()).unwrap();
        assert_relative_eq!(
            root.to_f64().unwrap(),
            std::f64::consts::SQRT_2,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_exact_cube_root() {
        let root = nth_root(dec!(27), 3, &RootConfig::default()).unwrap();
        assert_eq!(round_half_up(root, 20), dec!(3));
    }

    #[test]
    fn test_twelfth_root_of_growth_factor() {
        // (1.0375)^(1/12) = 1.003072541703255536...
        let root = nth_root(dec!(1.0375), 12, &RootConfig::default()).unwrap();
        assert_eq!(round_half_up(root, 18), dec!(1.003072541703255536));
    }

    #[test]
    fn test_root_of_small_radicand() {
        // Powers of a base below one lose significant digits at scale 28,
        // so the iteration stops at the precision floor instead of the tolerance
        let power = powi(dec!(0.9), 97).unwrap();
        let root = nth_root(power, 97, &RootConfig::default()).unwrap();
        assert_eq!(round_half_up(root, 18), dec!(0.9));

        for (base, n) in [(dec!(0.5), 52), (dec!(0.75), 97), (dec!(0.95), 365)] {
            let power = powi(base, u64::from(n)).unwrap();
            let root = nth_root(power, n, &RootConfig::default()).unwrap();
            assert!(
                (root - base).abs() < dec!(0.000000000001),
                "root {n} of {power} = {root}"
            );
        }
    }

    #[test]
    fn test_degree_one_is_identity() {
        assert_eq!(
            nth_root(dec!(1.15), 1, &RootConfig::default()).unwrap(),
            dec!(1.15)
        );
    }

    #[test]
    fn test_rejects_zero_degree() {
        assert!(matches!(
            nth_root(dec!(2), 0, &RootConfig::default()),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_radicand() {
        assert!(matches!(
            nth_root(Decimal::ZERO, 2, &RootConfig::default()),
            Err(MathError::Domain { .. })
        ));
        assert!(matches!(
            nth_root(dec!(-8), 3, &RootConfig::default()),
            Err(MathError::Domain { .. })
        ));
    }

    #[test]
    fn test_convergence_failure() {
        // A single iteration from an f64 seed cannot meet a zero tolerance
        let config = RootConfig::new(Decimal::ZERO, 1);
        let result = nth_root(dec!(1.0375), 365, &config);
        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    proptest! {
        #[test]
        fn prop_root_inverts_power(base in 0.9f64..1.1f64, n in 1u32..200u32) {
            let base = Decimal::from_f64_retain(base).unwrap().round_dp(12);
            let power = powi(base, u64::from(n)).unwrap();
            let root = nth_root(power, n, &RootConfig::default()).unwrap();
            prop_assert!((root - base).abs() < dec!(0.0000000000001));
        }
    }
}
