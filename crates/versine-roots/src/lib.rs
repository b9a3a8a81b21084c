//! # versine-roots
//!
//! Simultaneous polynomial root finding for the versine kernel.
//!
//! This crate provides:
//! - All complex roots of a real polynomial via the Aberth method
//! - Rigorous per-root error bounds from Bini's stopping criterion
//! - A real-root filter over those bounds
//! - Checked complex division for the iteration's coupling terms
//!
//! The solver is pure and deterministic: it either converges within a fixed
//! number of sweeps or fails with the last estimates attached. A caller that
//! wants resilience (say, rescaling a badly conditioned polynomial and
//! retrying) implements that policy outside the kernel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod aberth;
pub mod complex;

mod error;

pub use aberth::{
    poly_roots, poly_roots_with_bounds, real_roots, DEFAULT_TOLERANCE, MAX_SWEEPS,
};
pub use error::RootError;
