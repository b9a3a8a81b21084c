//! Error types for versine-poly.

use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// Division by the zero polynomial.
    ///
    /// In canonical form a zero leading coefficient and an empty coefficient
    /// vector are the same condition, so this covers both.
    #[error("polynomial division requires a nonzero divisor")]
    InvalidDivisor,
}
