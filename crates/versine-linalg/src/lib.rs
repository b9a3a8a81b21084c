//! # versine-linalg
//!
//! Dense linear algebra for the versine kernel.
//!
//! This crate provides:
//! - Dense `f64` matrices in row-major order
//! - Householder QR factorization
//! - Back substitution for (transposed) upper-triangular systems
//! - A linear system solver covering square, overdetermined and
//!   underdetermined systems with rank-deficiency detection
//! - Determinants via closed forms and cofactor expansion
//!
//! Singular and rank-deficient systems are signaled with `None` rather than
//! an error: a zero pivot or a (near-)zero diagonal entry of `R` means "no
//! solution to report", and callers branch on it. Errors are reserved for
//! precondition violations such as ragged or mis-shaped inputs.
//!
//! All operations are pure and single-threaded; matrix sizes are expected to
//! stay in the range typical of geometric computation (tens of rows, not
//! millions).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_precision_loss)]

pub mod dense_matrix;
pub mod determinant;
pub mod qr;
pub mod solve;
pub mod triangular;

mod error;

pub use dense_matrix::{dot, norm, DenseMatrix};
pub use error::LinalgError;
pub use qr::QrFactorization;
pub use triangular::{solve_triangular, solve_triangular_columns};


#[cfg(test)]
mod proptests;
