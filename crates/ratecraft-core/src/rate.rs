//! Interest rate value type.

use ratecraft_math::functions::round_half_up;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::conversion::{effective_to_nominal, effective_to_periodic, nominal_to_effective};
use crate::error::{RateError, RateResult};
use crate::types::{Compounding, CompoundingValue, PeriodsPerYear, RateKind, RateOptions, RateSpec};

/// Decimal places kept by [`Rate::monthly`].
pub const MONTHLY_PRECISION: u32 = 15;

/// An interest rate together with its quotation convention.
///
/// Both the effective and the nominal representation are computed once at
/// construction, so every accessor is infallible. Rates are ordered and
/// compared by their effective annual rate only: two rates with the same
/// effective value are equal whatever their kind, compounding or duration.
///
/// Equality is exact on the 28-digit effective rate. Going from effective to
/// nominal and back can move the last digit, so a rate rebuilt from
/// [`Rate::to_nominal`] may compare unequal to the rate it came from; round
/// both effective rates with [`round_half_up`] before comparing such pairs.
/// [`Rate::with_compounding`] keeps the effective rate and does not drift.
///
/// # Example
///
/// ```rust
/// use ratecraft_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let rate = Rate::new_nominal(dec!(0.15), RateOptions::default()).unwrap();
/// assert_eq!(round_half_up(rate.effective(), 5), dec!(0.16075));
///
/// let annual = Rate::new_effective(rate.effective(), RateOptions::new(Compounding::Annually)).unwrap();
/// assert_eq!(rate, annual);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RateSpec", into = "RateSpec")]
pub struct Rate {
    /// The rate as quoted (0.15 = 15%)
    value: Decimal,
    /// Convention `value` is quoted in
    kind: RateKind,
    /// Compounding frequency
    compounding: Compounding,
    /// Number of periods the rate applies to
    duration: Option<u32>,
    /// Effective annual rate
    effective: Decimal,
    /// Nominal annual rate under `compounding`
    nominal: Decimal,
}

impl Rate {
    /// Creates a new rate.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` if the compounding frequency is
    /// not positive, or if the value cannot be converted under it (a rate
    /// at or below -100%, or one whose compounded growth overflows).
    pub fn new(value: Decimal, kind: RateKind, options: RateOptions) -> RateResult<Self> {
        options.validate()?;
        let periods = options.compounding.periods_per_year();

        let (effective, nominal) = match kind {
            RateKind::Nominal => (nominal_to_effective(value, periods)?, value),
            RateKind::Effective => (value, effective_to_nominal(value, periods)?),
        };

        log::trace!(
            "rate {value} {kind} ({}): effective {effective}, nominal {nominal}",
            options.compounding
        );

        Ok(Self {
            value,
            kind,
            compounding: options.compounding,
            duration: options.duration,
            effective,
            nominal,
        })
    }

    /// Creates a rate quoted as a nominal annual rate.
    pub fn new_nominal(value: Decimal, options: RateOptions) -> RateResult<Self> {
        Self::new(value, RateKind::Nominal, options)
    }

    /// Creates a rate quoted as an effective annual rate.
    pub fn new_effective(value: Decimal, options: RateOptions) -> RateResult<Self> {
        Self::new(value, RateKind::Effective, options)
    }

    /// Creates a rate from a kind name such as `"nominal"` or `"effective"`.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` for an unknown kind, in addition
    /// to the failures of [`Rate::new`].
    pub fn parse(value: Decimal, kind: &str, options: RateOptions) -> RateResult<Self> {
        Self::new(value, kind.parse()?, options)
    }

    /// Converts an effective annual rate to the nominal rate for the given
    /// compounding frequency.
    ///
    /// `n * ((1 + effective)^(1/n) - 1)`, or `ln(1 + effective)` when
    /// compounding continuously.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ratecraft_core::prelude::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let monthly = Rate::to_nominal(dec!(0.0375), Compounding::Monthly).unwrap();
    /// assert_eq!(round_half_up(monthly, 5), dec!(0.03687));
    ///
    /// let continuous = Rate::to_nominal(dec!(0.0375), Compounding::Continuously).unwrap();
    /// assert_eq!(round_half_up(continuous, 5), dec!(0.03681));
    /// ```
    pub fn to_nominal(effective: Decimal, compounding: Compounding) -> RateResult<Decimal> {
        compounding.validate()?;
        effective_to_nominal(effective, compounding.periods_per_year())
    }

    /// Converts a nominal annual rate to the effective annual rate for the
    /// given compounding frequency.
    ///
    /// `(1 + nominal / n)^n - 1`, or `e^nominal - 1` when compounding
    /// continuously.
    pub fn to_effective(nominal: Decimal, compounding: Compounding) -> RateResult<Decimal> {
        compounding.validate()?;
        nominal_to_effective(nominal, compounding.periods_per_year())
    }

    /// Returns the rate as quoted.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the convention the rate is quoted in.
    #[must_use]
    pub fn kind(&self) -> RateKind {
        self.kind
    }

    /// Returns the compounding frequency.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the resolved number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> PeriodsPerYear {
        self.compounding.periods_per_year()
    }

    /// Returns the duration, if one was given.
    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    /// Returns the effective annual rate.
    ///
    /// Equal to [`value`](Self::value) for effective rates.
    #[must_use]
    pub fn effective(&self) -> Decimal {
        self.effective
    }

    /// Returns the nominal annual rate under this rate's compounding.
    ///
    /// Equal to [`value`](Self::value) for nominal rates.
    #[must_use]
    pub fn nominal(&self) -> Decimal {
        self.nominal
    }

    /// Annual percentage rate, an alias for [`nominal`](Self::nominal).
    #[must_use]
    pub fn apr(&self) -> Decimal {
        self.nominal
    }

    /// Annual percentage yield, an alias for [`effective`](Self::effective).
    #[must_use]
    pub fn apy(&self) -> Decimal {
        self.effective
    }

    /// Returns the monthly rate: the effective annual rate spread evenly
    /// over twelve months, kept to 15 decimal places.
    ///
    /// Use [`periodic`](Self::periodic) for the compounded equivalent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ratecraft_core::prelude::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let rate = Rate::new_effective(dec!(0.0375), RateOptions::default()).unwrap();
    /// assert_eq!(rate.monthly(), dec!(0.003125));
    /// ```
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        round_half_up(self.effective / Decimal::from(12), MONTHLY_PRECISION)
    }

    /// Returns the rate per period that compounds to the effective annual
    /// rate over `periods` periods: `(1 + effective)^(1/periods) - 1`.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` if `periods` is zero.
    pub fn periodic(&self, periods: u32) -> RateResult<Decimal> {
        effective_to_periodic(self.effective, periods)
    }

    /// Re-expresses this rate as a nominal rate under another compounding
    /// frequency. The effective rate and the duration are unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ratecraft_core::prelude::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let monthly = Rate::new_nominal(dec!(0.15), RateOptions::default()).unwrap();
    /// let quarterly = monthly.with_compounding(Compounding::Quarterly).unwrap();
    ///
    /// assert_eq!(quarterly.kind(), RateKind::Nominal);
    /// assert!(quarterly.value() > monthly.value());
    /// assert_eq!(quarterly, monthly);
    /// ```
    pub fn with_compounding(&self, compounding: Compounding) -> RateResult<Self> {
        let nominal = Self::to_nominal(self.effective, compounding)?;
        Ok(Self {
            value: nominal,
            kind: RateKind::Nominal,
            compounding,
            duration: self.duration,
            effective: self.effective,
            nominal,
        })
    }

    /// Compares two rates by their effective annual rates.
    ///
    /// `compare(..) as i8` yields -1, 0 or 1.
    #[must_use]
    pub fn compare(&self, other: &Rate) -> Ordering {
        self.effective.cmp(&other.effective)
    }

    /// Returns the quoted rate as a percentage.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.value * Decimal::ONE_HUNDRED
    }
}

impl PartialEq for Rate {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Rate {}

impl PartialOrd for Rate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}% {} ({})",
            self.as_percentage(),
            self.kind,
            self.compounding
        )
    }
}

impl TryFrom<RateSpec> for Rate {
    type Error = RateError;

    fn try_from(spec: RateSpec) -> RateResult<Self> {
        let options = spec.options()?;
        Rate::parse(spec.value, &spec.kind, options)
    }
}

impl From<Rate> for RateSpec {
    fn from(rate: Rate) -> Self {
        RateSpec {
            value: rate.value,
            kind: rate.kind.to_string(),
            compounding: Some(CompoundingValue::from(rate.compounding)),
            duration: rate.duration,
        }
    }
}
