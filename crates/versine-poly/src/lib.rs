//! # versine-poly
//!
//! Dense univariate polynomial arithmetic over `f64` for the versine kernel.
//!
//! This crate provides:
//! - A canonical dense representation, highest-degree coefficient first
//! - Horner evaluation at real and complex points
//! - Addition, multiplication and long division with remainder
//! - Leading-zero trimming with an optional tolerance
//! - Derivatives, as consumed by the root finder
//!
//! The zero polynomial is the empty coefficient vector. That choice lets
//! division return a genuinely empty quotient or remainder, which callers
//! treat as "nothing left", and keeps the canonical-form invariant simple:
//! a non-empty polynomial always has a nonzero leading coefficient.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod dense;

mod error;

pub use dense::Poly;
pub use error::PolyError;

#[cfg(test)]
mod proptests;
