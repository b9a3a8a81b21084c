//! Back substitution for upper-triangular systems.
//!
//! Solves `R·x = b` for upper-triangular `R`, or `Rᵗ·x = b` with the
//! `transpose` flag set. Entries below the diagonal are assumed to be zero
//! and are never read, so the caller may pass any matrix whose upper
//! triangle holds the system.
//!
//! A zero diagonal pivot means the system is singular. That is a valid
//! outcome, not a programming error, so it is reported as `None` and must be
//! propagated by callers rather than retried.

use crate::dense_matrix::DenseMatrix;

/// Solves `R·x = b` (or `Rᵗ·x = b` when `transpose` is set) by substitution.
///
/// Unknowns are processed from the last index backward, substituting each
/// already-solved component into the next row. The transpose case runs the
/// same kernel with the traversal reversed and the indices swapped, which
/// makes it exactly a forward substitution on the lower-triangular `Rᵗ`.
///
/// Returns `None` when any diagonal pivot is exactly zero.
///
/// # Panics
///
/// Panics if `r` is not square or `b` does not have one entry per row of
/// `r`. A rectangular factor fresh from a factorization must be cut down to
/// its leading square block first.
#[must_use]
pub fn solve_triangular(r: &DenseMatrix, b: &[f64], transpose: bool) -> Option<Vec<f64>> {
    assert!(r.is_square());
    let n = r.num_rows();
    assert_eq!(b.len(), n);

    let entry = |i: usize, j: usize| if transpose { r[(j, i)] } else { r[(i, j)] };

    let mut x = vec![0.0; n];
    for step in 0..n {
        // Back substitution runs last-to-first; the transposed (lower
        // triangular) system runs first-to-last instead.
        let i = if transpose { step } else { n - 1 - step };
        let pivot = entry(i, i);
        if pivot == 0.0 {
            return None;
        }
        let solved = if transpose { 0..i } else { i + 1..n };
        let mut sum = b[i];
        for j in solved {
            sum -= entry(i, j) * x[j];
        }
        x[i] = sum / pivot;
    }
    Some(x)
}

/// Batched form of [`solve_triangular`]: solves one system per column of `b`.
///
/// Each column is solved independently; the solutions are reassembled as the
/// columns of the result, so the output has the same column count as `b`.
/// A zero pivot in any column makes the whole batch `None`.
///
/// # Panics
///
/// Panics if `r` is not square or `b` does not have one row per row of `r`.
#[must_use]
pub fn solve_triangular_columns(
    r: &DenseMatrix,
    b: &DenseMatrix,
    transpose: bool,
) -> Option<DenseMatrix> {
    assert!(r.is_square());
    assert_eq!(b.num_rows(), r.num_rows());

    let mut out = DenseMatrix::zeros(r.num_rows(), b.num_cols());
    for col in 0..b.num_cols() {
        let x = solve_triangular(r, &b.col(col), transpose)?;
        out.set_col(col, &x);
    }
    Some(out)
}
