//! Error types for versine-linalg.

use thiserror::Error;

/// Errors raised by dense linear algebra operations.
///
/// These cover precondition violations only. Singular or rank-deficient
/// inputs are not errors; they surface as a `None` result from the solver
/// entry points.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand dimensions do not agree.
    #[error("shape mismatch: expected {expected} rows, got {got}")]
    ShapeMismatch {
        /// Row count required by the operation.
        expected: usize,
        /// Row count actually supplied.
        got: usize,
    },

    /// A row of the input had the wrong length.
    #[error("ragged matrix: row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A square matrix was required.
    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
