//! # Versine
//!
//! A dense-matrix and polynomial numerical kernel for geometric computation.
//!
//! Versine factors matrices, solves linear systems (square, overdetermined,
//! underdetermined, rank-deficient), computes determinants, and finds all
//! complex roots of a real polynomial by simultaneous iteration.
//!
//! ## Design
//!
//! - **Pure functions**: no state survives a call; inputs are plain vectors,
//!   matrices and coefficient lists, outputs are fresh ones
//! - **Typed sentinels**: singular and rank-deficient systems come back as
//!   `None`, precondition violations as errors, and the two are never
//!   conflated
//! - **Small sizes by design**: double precision, tens of dimensions;
//!   sparse storage, arbitrary precision and parallelism are out of scope
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use versine::prelude::*;
//!
//! let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let x = a.linear_solve(&[5.0, 11.0])?.expect("a is nonsingular");
//!
//! let p = Poly::new(vec![1.0, -6.0, 11.0, -6.0]);
//! let roots = poly_roots(&p, DEFAULT_TOLERANCE)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use versine_linalg as linalg;
pub use versine_poly as poly;
pub use versine_roots as roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use versine_linalg::{
        dot, norm, solve_triangular, solve_triangular_columns, DenseMatrix, LinalgError,
        QrFactorization,
    };
    pub use versine_poly::{Poly, PolyError};
    pub use versine_roots::{
        poly_roots, poly_roots_with_bounds, real_roots, RootError, DEFAULT_TOLERANCE,
    };
}
