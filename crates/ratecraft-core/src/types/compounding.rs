//! Compounding frequency types.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RateError, RateResult};

/// How often interest is compounded within a year.
///
/// Either one of the named frequencies or a raw number of periods per year.
/// The continuous limit is the distinguished [`Compounding::Continuously`]
/// variant rather than an infinite count.
///
/// Deserializes from a name (`"monthly"`, `"SemiAnnually"`, ...) or from a
/// positive number.
///
/// # Example
///
/// ```rust
/// use ratecraft_core::types::{Compounding, PeriodsPerYear};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(Compounding::default(), Compounding::Monthly);
/// assert_eq!(
///     Compounding::Quarterly.periods_per_year(),
///     PeriodsPerYear::Finite(dec!(4))
/// );
/// assert!("quickly".parse::<Compounding>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "CompoundingValue", into = "CompoundingValue")]
pub enum Compounding {
    /// Once per year
    Annually,
    /// Twice per year
    SemiAnnually,
    /// Four times per year
    Quarterly,
    /// Twelve times per year
    #[default]
    Monthly,
    /// 365 times per year
    Daily,
    /// The continuous-compounding limit
    Continuously,
    /// An explicit, strictly positive number of periods per year
    PerYear(Decimal),
}

impl Compounding {
    /// The named frequencies, from least to most frequent.
    pub const NAMED: [Compounding; 6] = [
        Compounding::Annually,
        Compounding::SemiAnnually,
        Compounding::Quarterly,
        Compounding::Monthly,
        Compounding::Daily,
        Compounding::Continuously,
    ];

    /// Creates a compounding from an explicit number of periods per year.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` unless `periods` is positive.
    pub fn per_year(periods: Decimal) -> RateResult<Self> {
        let compounding = Compounding::PerYear(periods);
        compounding.validate()?;
        Ok(compounding)
    }

    /// Checks that an explicit period count is positive.
    pub fn validate(&self) -> RateResult<()> {
        match self {
            Compounding::PerYear(periods) if *periods <= Decimal::ZERO => {
                Err(RateError::invalid_argument(format!(
                    "compounding periods per year must be positive, got {periods}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> PeriodsPerYear {
        match self {
            Compounding::Annually => PeriodsPerYear::Finite(Decimal::ONE),
            Compounding::SemiAnnually => PeriodsPerYear::Finite(Decimal::TWO),
            Compounding::Quarterly => PeriodsPerYear::Finite(Decimal::from(4)),
            Compounding::Monthly => PeriodsPerYear::Finite(Decimal::from(12)),
            Compounding::Daily => PeriodsPerYear::Finite(Decimal::from(365)),
            Compounding::Continuously => PeriodsPerYear::Continuous,
            Compounding::PerYear(periods) => PeriodsPerYear::Finite(*periods),
        }
    }

    /// Returns the canonical name, or `None` for an explicit period count.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Compounding::Annually => Some("Annually"),
            Compounding::SemiAnnually => Some("SemiAnnually"),
            Compounding::Quarterly => Some("Quarterly"),
            Compounding::Monthly => Some("Monthly"),
            Compounding::Daily => Some("Daily"),
            Compounding::Continuously => Some("Continuously"),
            Compounding::PerYear(_) => None,
        }
    }
}

impl FromStr for Compounding {
    type Err = RateError;

    /// Parses a frequency name, ignoring case, `_`, `-` and spaces.
    /// A bare positive number is accepted as a period count.
    fn from_str(s: &str) -> RateResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "annually" | "annual" => Ok(Compounding::Annually),
            "semiannually" | "semiannual" => Ok(Compounding::SemiAnnually),
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            "daily" => Ok(Compounding::Daily),
            "continuously" | "continuous" => Ok(Compounding::Continuously),
            _ => match Decimal::from_str(s.trim()) {
                Ok(periods) => Compounding::per_year(periods),
                Err(_) => Err(RateError::invalid_argument(format!(
                    "unknown compounding frequency: {s:?}"
                ))),
            },
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annually => "Annually",
            Compounding::SemiAnnually => "Semi-Annually",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Daily => "Daily",
            Compounding::Continuously => "Continuously",
            Compounding::PerYear(periods) => return write!(f, "{periods}x per year"),
        };
        write!(f, "{name}")
    }
}

/// Serialized form of [`Compounding`]: a name or a number of periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompoundingValue {
    /// A frequency name such as `"monthly"`.
    Name(String),
    /// A number of periods per year.
    PerYear(Decimal),
}

impl TryFrom<CompoundingValue> for Compounding {
    type Error = RateError;

    fn try_from(value: CompoundingValue) -> RateResult<Self> {
        match value {
            CompoundingValue::Name(name) => name.parse(),
            CompoundingValue::PerYear(periods) => Compounding::per_year(periods),
        }
    }
}

impl From<Compounding> for CompoundingValue {
    fn from(compounding: Compounding) -> Self {
        match compounding {
            Compounding::PerYear(periods) => CompoundingValue::PerYear(periods),
            named => CompoundingValue::Name(named.name().unwrap_or_default().to_string()),
        }
    }
}

/// Resolved compounding frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodsPerYear {
    /// A finite number of periods per year.
    Finite(Decimal),
    /// The continuous-compounding limit.
    Continuous,
}

impl PeriodsPerYear {
    /// Returns the finite period count, if any.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            PeriodsPerYear::Finite(periods) => Some(*periods),
            PeriodsPerYear::Continuous => None,
        }
    }

    /// Returns the period count when it is a positive whole number.
    #[must_use]
    pub fn whole(&self) -> Option<u32> {
        self.as_decimal()
            .filter(|periods| periods.fract().is_zero() && *periods > Decimal::ZERO)
            .and_then(|periods| periods.to_u32())
    }
}

impl From<Compounding> for PeriodsPerYear {
    fn from(compounding: Compounding) -> Self {
        compounding.periods_per_year()
    }
}

impl fmt::Display for PeriodsPerYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodsPerYear::Finite(periods) => write!(f, "{periods}"),
            PeriodsPerYear::Continuous => write!(f, "continuous"),
        }
    }
}
