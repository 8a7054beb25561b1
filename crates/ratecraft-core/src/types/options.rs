//! Rate construction options and serializable rate descriptions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Compounding, CompoundingValue};
use crate::error::{RateError, RateResult};

/// Optional settings for constructing a [`Rate`](crate::Rate).
///
/// | Field | Default |
/// |-------|---------|
/// | `compounding` | [`Compounding::Monthly`] |
/// | `duration` | `None` |
///
/// # Example
///
/// ```rust
/// use ratecraft_core::types::{Compounding, RateOptions};
///
/// let options = RateOptions::default()
///     .with_compounding(Compounding::Quarterly)
///     .with_duration(360);
/// assert_eq!(options.compounding, Compounding::Quarterly);
/// assert_eq!(options.duration, Some(360));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateOptions {
    /// Compounding frequency.
    #[serde(default)]
    pub compounding: Compounding,

    /// Number of periods the rate applies to (e.g. a loan term in months).
    /// Carried verbatim, never used in conversions.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl RateOptions {
    /// Creates options with the given compounding and no duration.
    #[must_use]
    pub fn new(compounding: Compounding) -> Self {
        Self {
            compounding,
            duration: None,
        }
    }

    /// Sets the compounding frequency.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` if an explicit compounding
    /// frequency is not positive.
    pub fn validate(&self) -> RateResult<()> {
        self.compounding.validate()
    }
}

/// A loosely typed description of a rate, as read from configuration.
///
/// Nothing is checked on deserialization beyond the JSON shape; the kind
/// and compounding are resolved when converting into a
/// [`Rate`](crate::Rate), which is where unknown names are rejected.
///
/// # Example
///
/// ```rust
/// use ratecraft_core::types::RateSpec;
/// use ratecraft_core::Rate;
///
/// let spec = RateSpec::from_json(
///     r#"{ "value": 0.15, "kind": "nominal", "compounding": "quarterly" }"#,
/// ).unwrap();
/// let rate = Rate::try_from(spec).unwrap();
/// assert_eq!(rate.effective().round_dp(5).to_string(), "0.15865");
///
/// let spec = RateSpec::from_json(r#"{ "value": 0.15, "kind": "foo" }"#).unwrap();
/// assert!(Rate::try_from(spec).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSpec {
    /// The rate as a fraction (0.15 = 15%).
    pub value: Decimal,

    /// `"nominal"` or `"effective"`.
    pub kind: String,

    /// A frequency name or a number of periods per year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounding: Option<CompoundingValue>,

    /// Number of periods the rate applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl RateSpec {
    /// Parses a spec from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` if the document is malformed.
    pub fn from_json(json: &str) -> RateResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| RateError::invalid_argument(format!("malformed rate spec: {err}")))
    }

    /// Serializes the spec to a JSON document.
    pub fn to_json(&self) -> RateResult<String> {
        serde_json::to_string(self)
            .map_err(|err| RateError::invalid_argument(format!("unserializable rate spec: {err}")))
    }

    /// Resolves the options part of the spec.
    ///
    /// # Errors
    ///
    /// Returns `RateError::InvalidArgument` for an unknown compounding name
    /// or a non-positive period count.
    pub fn options(&self) -> RateResult<RateOptions> {
        let compounding = match &self.compounding {
            Some(value) => Compounding::try_from(value.clone())?,
            None => Compounding::default(),
        };
        Ok(RateOptions {
            compounding,
            duration: self.duration,
        })
    }
}
