//! Nominal/effective conversion formulas.
//!
//! For `n` compounding periods per year:
//!
//! ```text
//! effective = (1 + nominal / n)^n - 1        nominal = n * ((1 + effective)^(1/n) - 1)
//! effective = e^nominal - 1   (continuous)   nominal = ln(1 + effective)   (continuous)
//! ```
//!
//! Whole period counts use exact integer powers and a decimal Newton root;
//! fractional counts go through `exp`/`ln`.

use ratecraft_math::functions::{exp, ln, powd, powi};
use ratecraft_math::solvers::{nth_root, RootConfig};
use rust_decimal::Decimal;

use crate::error::{RateError, RateResult};
use crate::types::PeriodsPerYear;

/// Converts a nominal annual rate to the effective annual rate.
///
/// # Errors
///
/// Returns `RateError::InvalidArgument` if `periods` is not positive, if
/// `1 + nominal / n` is not positive, or if the result overflows.
///
/// # Example
///
/// ```rust
/// use ratecraft_core::conversion::nominal_to_effective;
/// use ratecraft_core::types::PeriodsPerYear;
/// use rust_decimal_macros::dec;
///
/// let effective = nominal_to_effective(dec!(0.15), PeriodsPerYear::Finite(dec!(2))).unwrap();
/// assert_eq!(effective, dec!(0.155625));
/// ```
pub fn nominal_to_effective(nominal: Decimal, periods: PeriodsPerYear) -> RateResult<Decimal> {
    let growth = match periods {
        PeriodsPerYear::Continuous => exp(nominal)?,
        PeriodsPerYear::Finite(n) => {
            ensure_positive(n)?;
            let base = nominal
                .checked_div(n)
                .and_then(|per_period| per_period.checked_add(Decimal::ONE))
                .ok_or_else(|| out_of_range(nominal))?;
            if base <= Decimal::ZERO {
                return Err(RateError::invalid_argument(format!(
                    "nominal rate {nominal} must be greater than -{n} for {n} periods per year"
                )));
            }
            match periods.whole() {
                Some(whole) => powi(base, u64::from(whole))?,
                None => powd(base, n)?,
            }
        }
    };
    Ok(growth - Decimal::ONE)
}

/// Converts an effective annual rate to the nominal annual rate.
///
/// This is the inverse of [`nominal_to_effective`] for the same `periods`.
///
/// # Errors
///
/// Returns `RateError::InvalidArgument` if `periods` is not positive or if
/// `effective` is not greater than -1.
pub fn effective_to_nominal(effective: Decimal, periods: PeriodsPerYear) -> RateResult<Decimal> {
    let growth = effective
        .checked_add(Decimal::ONE)
        .ok_or_else(|| out_of_range(effective))?;
    if growth <= Decimal::ZERO {
        return Err(RateError::invalid_argument(format!(
            "effective rate {effective} must be greater than -1"
        )));
    }

    match periods {
        PeriodsPerYear::Continuous => Ok(ln(growth)?),
        PeriodsPerYear::Finite(n) => {
            ensure_positive(n)?;
            let root = match periods.whole() {
                Some(whole) => nth_root(growth, whole, &RootConfig::default())?,
                None => powd(growth, Decimal::ONE / n)?,
            };
            (root - Decimal::ONE)
                .checked_mul(n)
                .ok_or_else(|| out_of_range(effective))
        }
    }
}

/// Converts an effective annual rate to the rate per sub-annual period.
///
/// Treats the annual rate as the result of `periods` compoundings:
/// `(1 + effective)^(1/periods) - 1`.
///
/// # Errors
///
/// Returns `RateError::InvalidArgument` if `periods` is zero or if
/// `effective` is not greater than -1.
pub fn effective_to_periodic(effective: Decimal, periods: u32) -> RateResult<Decimal> {
    if periods == 0 {
        return Err(RateError::invalid_argument(
            "number of periods must be at least 1",
        ));
    }
    let per_period = effective_to_nominal(effective, PeriodsPerYear::Finite(Decimal::from(periods)))?;
    Ok(per_period / Decimal::from(periods))
}

fn ensure_positive(periods: Decimal) -> RateResult<()> {
    if periods <= Decimal::ZERO {
        return Err(RateError::invalid_argument(format!(
            "compounding periods per year must be positive, got {periods}"
        )));
    }
    Ok(())
}

fn out_of_range(value: Decimal) -> RateError {
    RateError::invalid_argument(format!("rate {value} is out of the representable range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecraft_math::functions::round_half_up;
    use rust_decimal_macros::dec;

    fn finite(n: u32) -> PeriodsPerYear {
        PeriodsPerYear::Finite(Decimal::from(n))
    }

    #[test]
    fn test_annual_compounding_is_identity() {
        assert_eq!(nominal_to_effective(dec!(0.15), finite(1)).unwrap(), dec!(0.15));
        assert_eq!(effective_to_nominal(dec!(0.15), finite(1)).unwrap(), dec!(0.15));
    }

    #[test]
    fn test_nominal_to_effective_reference_values() {
        let cases = [
            (finite(12), dec!(0.16075)),
            (finite(365), dec!(0.16180)),
            (finite(4), dec!(0.15865)),
            (finite(2), dec!(0.15563)),
            (finite(7), dec!(0.15999)),
            (PeriodsPerYear::Continuous, dec!(0.16183)),
        ];
        for (periods, expected) in cases {
            let effective = nominal_to_effective(dec!(0.15), periods).unwrap();
            assert_eq!(round_half_up(effective, 5), expected, "periods = {periods}");
        }
    }

    #[test]
    fn test_effective_to_nominal_reference_values() {
        let monthly = effective_to_nominal(dec!(0.0375), finite(12)).unwrap();
        assert_eq!(round_half_up(monthly, 5), dec!(0.03687));

        let continuous = effective_to_nominal(dec!(0.0375), PeriodsPerYear::Continuous).unwrap();
        assert_eq!(round_half_up(continuous, 5), dec!(0.03681));
    }

    #[test]
    fn test_fractional_periods() {
        // Half a compounding per year: (1 + 0.1 / 0.5)^0.5 - 1 = sqrt(1.2) - 1
        let effective = nominal_to_effective(dec!(0.1), PeriodsPerYear::Finite(dec!(0.5))).unwrap();
        assert_eq!(round_half_up(effective, 12), dec!(0.095445115010));

        let nominal = effective_to_nominal(effective, PeriodsPerYear::Finite(dec!(0.5))).unwrap();
        assert_eq!(round_half_up(nominal, 15), dec!(0.1));
    }

    #[test]
    fn test_negative_rates() {
        let effective = nominal_to_effective(dec!(-0.01), finite(12)).unwrap();
        assert!(effective < Decimal::ZERO);
        let nominal = effective_to_nominal(effective, finite(12)).unwrap();
        assert_eq!(round_half_up(nominal, 20), dec!(-0.01));
    }

    #[test]
    fn test_rejects_non_positive_periods() {
        assert!(nominal_to_effective(dec!(0.15), PeriodsPerYear::Finite(Decimal::ZERO)).is_err());
        assert!(effective_to_nominal(dec!(0.15), PeriodsPerYear::Finite(dec!(-1))).is_err());
    }

    #[test]
    fn test_rejects_total_loss() {
        assert!(effective_to_nominal(dec!(-1), finite(12)).is_err());
        assert!(effective_to_nominal(dec!(-1.5), PeriodsPerYear::Continuous).is_err());
        assert!(nominal_to_effective(dec!(-12), finite(12)).is_err());
    }

    #[test]
    fn test_deep_negative_continuous_rate_approaches_total_loss() {
        let effective = nominal_to_effective(dec!(-100), PeriodsPerYear::Continuous).unwrap();
        assert_eq!(effective, dec!(-1));
        let effective = nominal_to_effective(dec!(-60), PeriodsPerYear::Continuous).unwrap();
        assert!(effective > dec!(-1));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(nominal_to_effective(dec!(1000), PeriodsPerYear::Continuous).is_err());
        assert!(nominal_to_effective(dec!(100000), finite(365)).is_err());
    }

    #[test]
    fn test_effective_to_periodic() {
        // (1.0375)^(1/12) - 1 = 0.003072541703255536...
        let monthly = effective_to_periodic(dec!(0.0375), 12).unwrap();
        assert_eq!(round_half_up(monthly, 15), dec!(0.003072541703256));

        assert_eq!(effective_to_periodic(dec!(0.0375), 1).unwrap(), dec!(0.0375));
        assert!(effective_to_periodic(dec!(0.0375), 0).is_err());
    }
}
