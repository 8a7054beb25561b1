//! Domain types for interest rate conventions.
//!
//! - [`RateKind`]: Nominal or effective quotation
//! - [`Compounding`]: Named compounding frequency or explicit periods per year
//! - [`PeriodsPerYear`]: Resolved frequency, finite or continuous
//! - [`RateOptions`]: Construction options with documented defaults
//! - [`RateSpec`]: Serializable, unvalidated rate description

mod compounding;
mod kind;
mod options;

pub use compounding::{Compounding, CompoundingValue, PeriodsPerYear};
pub use kind::RateKind;
pub use options::{RateOptions, RateSpec};
