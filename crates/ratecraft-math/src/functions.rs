//! Elementary functions on [`Decimal`].
//!
//! Thin, checked wrappers around `rust_decimal`'s [`MathematicalOps`] that
//! tighten the default tolerances to the full 28-digit precision of
//! `Decimal`. Integer powers are computed exactly by repeated squaring;
//! logarithms are polished with Halley iterations against [`exp`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::{MathError, MathResult};

/// Tolerance for the `exp` Taylor series.
pub const EXP_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 27);

/// Tolerance for the Halley refinement of `ln`.
pub const LN_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 26);

/// Maximum Halley refinement steps applied to `ln`.
pub const LN_MAX_REFINEMENTS: u32 = 8;

/// Computes `e^x`.
///
/// # Example
///
/// ```rust
/// use ratecraft_math::functions::{exp, round_half_up};
/// use rust_decimal_macros::dec;
///
/// let growth = exp(dec!(0.15)).unwrap();
/// assert_eq!(round_half_up(growth, 8), dec!(1.16183424));
/// ```
pub fn exp(x: Decimal) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::ONE);
    }

    if x.is_sign_negative() {
        // e^-x beyond Decimal::MAX puts e^x below the smallest representable step
        return match exp(-x) {
            Ok(inverse) => Decimal::ONE
                .checked_div(inverse)
                .ok_or_else(|| MathError::division_by_zero("exp")),
            Err(MathError::Overflow { .. }) => Ok(Decimal::ZERO),
            Err(err) => Err(err),
        };
    }

    x.checked_exp_with_tolerance(EXP_TOLERANCE)
        .ok_or_else(|| MathError::overflow("exp"))
}

/// Computes the natural logarithm `ln(x)` for `x > 0`.
pub fn ln(x: Decimal) -> MathResult<Decimal> {
    if x <= Decimal::ZERO {
        return Err(MathError::domain("ln", x));
    }
    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    let mut y = x.checked_ln().ok_or_else(|| MathError::domain("ln", x))?;

    // Halley: y += 2 (x - e^y) / (x + e^y)
    for _ in 0..LN_MAX_REFINEMENTS {
        let growth = exp(y)?;
        let numerator = x
            .checked_sub(growth)
            .and_then(|d| d.checked_mul(Decimal::TWO))
            .ok_or_else(|| MathError::overflow("ln"))?;
        let denominator = x
            .checked_add(growth)
            .ok_or_else(|| MathError::overflow("ln"))?;
        let step = numerator
            .checked_div(denominator)
            .ok_or_else(|| MathError::division_by_zero("ln"))?;

        y += step;
        if step.abs() <= LN_TOLERANCE {
            return Ok(y);
        }
    }

    log::debug!("ln({x}) refinement hit the iteration cap, returning {y}");
    Ok(y)
}

/// Computes `base^exponent` for a non-negative integer exponent.
///
/// Uses repeated squaring, so the result is exact up to the rounding of
/// each intermediate product.
pub fn powi(base: Decimal, exponent: u64) -> MathResult<Decimal> {
    base.checked_powu(exponent)
        .ok_or_else(|| MathError::overflow(format!("{base}^{exponent}")))
}

/// Computes `base^exponent` for an arbitrary decimal exponent.
///
/// Whole exponents are routed through [`powi`]; fractional exponents are
/// evaluated as `exp(exponent * ln(base))` and require `base > 0`.
pub fn powd(base: Decimal, exponent: Decimal) -> MathResult<Decimal> {
    if exponent.fract().is_zero() {
        if let Some(whole) = exponent.abs().to_u64() {
            let power = powi(base, whole)?;
            return if exponent.is_sign_negative() {
                Decimal::ONE
                    .checked_div(power)
                    .ok_or_else(|| MathError::division_by_zero("powd"))
            } else {
                Ok(power)
            };
        }
    }

    if base <= Decimal::ZERO {
        return Err(MathError::domain("powd", base));
    }

    let scaled = ln(base)?
        .checked_mul(exponent)
        .ok_or_else(|| MathError::overflow("powd"))?;
    exp(scaled)
}

/// Rounds to `decimal_places`, with midpoints rounded away from zero.
///
/// Rates are reported with half-up rounding (0.155625 -> 0.15563), unlike
/// [`Decimal::round_dp`] which rounds midpoints to even.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}
