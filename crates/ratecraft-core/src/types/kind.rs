//! Rate quotation kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RateError, RateResult};

/// Which convention a rate's value is quoted in.
///
/// # Example
///
/// ```rust
/// use ratecraft_core::types::RateKind;
///
/// let kind: RateKind = "nominal".parse().unwrap();
/// assert_eq!(kind, RateKind::Nominal);
/// assert!("foo".parse::<RateKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    /// Stated annual rate, before within-year compounding (APR).
    #[serde(alias = "apr")]
    Nominal,
    /// Annual rate actually realized after compounding (APY).
    #[serde(alias = "apy")]
    Effective,
}

impl RateKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RateKind::Nominal => "nominal",
            RateKind::Effective => "effective",
        }
    }
}

impl FromStr for RateKind {
    type Err = RateError;

    fn from_str(s: &str) -> RateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nominal" | "apr" => Ok(RateKind::Nominal),
            "effective" | "apy" => Ok(RateKind::Effective),
            _ => Err(RateError::invalid_argument(format!(
                "unknown rate kind: {s:?} (expected nominal or effective)"
            ))),
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
