//! # Ratecraft Math
//!
//! High-precision decimal functions for the Ratecraft interest rate library.
//!
//! This crate provides:
//!
//! - **Functions**: `exp`, `ln` and powers on [`Decimal`](rust_decimal::Decimal)
//! - **Solvers**: Newton-Raphson n-th roots in decimal arithmetic
//! - **Rounding**: Half-up rounding for reporting rates at fixed precision
//!
//! ## Design Philosophy
//!
//! - **Precision First**: Every routine works in 28-digit decimal arithmetic,
//!   never falling back to `f64` for the result
//! - **Checked Arithmetic**: Overflow and domain errors surface as [`MathError`]
//!   instead of panics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod functions;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::functions::{exp, ln, powd, powi, round_half_up};
    pub use crate::solvers::{nth_root, RootConfig};
}

pub use error::{MathError, MathResult};
