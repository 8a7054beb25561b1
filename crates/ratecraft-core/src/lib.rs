//! # Ratecraft Core
//!
//! Interest rate representation and conversion for the Ratecraft library.
//!
//! A [`Rate`] carries a value, the convention it is quoted in (nominal or
//! effective) and a compounding frequency, and converts between the two
//! conventions in 28-digit decimal arithmetic:
//!
//! - **Types**: [`Rate`], [`RateKind`], [`Compounding`], [`RateOptions`]
//! - **Conversions**: Nominal/effective formulas for discrete and continuous
//!   compounding, periodic rates
//! - **Errors**: A single [`RateError::InvalidArgument`], raised at
//!   construction
//!
//! ## Example
//!
//! ```rust
//! use ratecraft_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let card = Rate::new(dec!(0.15), RateKind::Nominal, RateOptions::default())?;
//! assert_eq!(round_half_up(card.effective(), 5), dec!(0.16075));
//!
//! let savings = Rate::new(
//!     dec!(0.16),
//!     RateKind::Nominal,
//!     RateOptions::new(Compounding::Annually).with_duration(360),
//! )?;
//! assert!(card > savings);
//! assert_eq!(savings.duration(), Some(360));
//! # Ok::<(), RateError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod conversion;
pub mod error;
pub mod rate;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RateError, RateResult};
    pub use crate::rate::Rate;
    pub use crate::types::{Compounding, PeriodsPerYear, RateKind, RateOptions, RateSpec};
    pub use ratecraft_math::functions::round_half_up;
}

// Re-export commonly used types at crate root
pub use error::{RateError, RateResult};
pub use rate::Rate;
pub use types::{Compounding, RateKind, RateOptions};
