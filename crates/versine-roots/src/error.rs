//! Error types for versine-roots.

use num_complex::Complex64;
use thiserror::Error;

/// Errors raised by the root finder.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RootError {
    /// The polynomial has no nonzero coefficient.
    #[error("root finding requires a polynomial with a nonzero coefficient")]
    DegenerateInput,

    /// Complex division by zero.
    ///
    /// The iteration guarantees non-zero divisors structurally (estimates
    /// stay distinct); hitting this means that guarantee was violated.
    #[error("complex division by zero")]
    DivisionByZero,

    /// The iteration cap was reached before every root converged.
    ///
    /// A method that has not converged has no safe partial answer, so this
    /// is fatal; the last estimates are attached for diagnosis only.
    #[error("no convergence after {iterations} sweeps")]
    NoConvergence {
        /// Number of sweeps performed.
        iterations: usize,
        /// The estimates at the point of failure.
        estimates: Vec<Complex64>,
    },
}
