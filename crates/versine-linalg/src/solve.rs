//! Linear system solving over QR.
//!
//! Dispatches on the shape of the system: square and overdetermined systems
//! get the least-squares solution through a QR of `A`, underdetermined
//! systems get the minimum-norm solution through a QR of `Aᵗ`. Rank
//! deficiency is detected on the diagonal of `R` and reported as `None`,
//! which callers must branch on; it is deliberately distinct from the error
//! path, which is reserved for shape violations.

use crate::dense_matrix::DenseMatrix;
use crate::error::LinalgError;
use crate::qr::QrFactorization;
use crate::triangular::{solve_triangular, solve_triangular_columns};

/// Any `|R[i][i]|` at or below this is treated as a vanished pivot.
///
/// Sits between the QR round-trip tolerance and machine epsilon; a diagonal
/// entry this small means the columns are numerically dependent.
const RANK_TOL: f64 = 1e-12;

/// Economy-sized factors for a solve: `q1` (`dim × k`), `r1` (`k × k`), with
/// `k = min(m, n)`. `None` when `r1` has a vanished diagonal entry.
fn economy_factors(a: &DenseMatrix, k: usize) -> Option<(DenseMatrix, DenseMatrix)> {
    let QrFactorization { q, r } = a.qr();
    let r1 = r.leading_rows(k).leading_cols(k);
    for i in 0..k {
        if r1[(i, i)].abs() <= RANK_TOL {
            return None;
        }
    }
    Some((q.leading_cols(k), r1))
}

impl DenseMatrix {
    /// Solves `A·x = b` for a single right-hand side.
    ///
    /// Returns the exact solution for a nonsingular square system, the
    /// least-squares solution when overdetermined, and the minimum-norm
    /// solution when underdetermined. `Ok(None)` signals a rank-deficient or
    /// singular system.
    ///
    /// # Errors
    ///
    /// [`LinalgError::ShapeMismatch`] if `b` does not have one entry per row.
    pub fn linear_solve(&self, b: &[f64]) -> Result<Option<Vec<f64>>, LinalgError> {
        let m = self.num_rows();
        if b.len() != m {
            return Err(LinalgError::ShapeMismatch {
                expected: m,
                got: b.len(),
            });
        }

        let n = self.num_cols();
        let k = m.min(n);
        if m < n {
            // Underdetermined: minimum-norm solution via QR of the transpose.
            let Some((q1, r1)) = economy_factors(&self.transpose(), k) else {
                return Ok(None);
            };
            Ok(solve_triangular(&r1, b, true).map(|y| q1.mv(&y)))
        } else {
            let Some((q1, r1)) = economy_factors(self, k) else {
                return Ok(None);
            };
            let qtb = q1.transpose().mv(b);
            Ok(solve_triangular(&r1, &qtb, false))
        }
    }

    /// Batched form of [`DenseMatrix::linear_solve`]: one system per column
    /// of `b`, solutions reassembled as the columns of the result.
    ///
    /// # Errors
    ///
    /// [`LinalgError::ShapeMismatch`] if `b`'s row count differs from this
    /// matrix's.
    pub fn linear_solve_columns(
        &self,
        b: &DenseMatrix,
    ) -> Result<Option<DenseMatrix>, LinalgError> {
        let m = self.num_rows();
        if b.num_rows() != m {
            return Err(LinalgError::ShapeMismatch {
                expected: m,
                got: b.num_rows(),
            });
        }

        let n = self.num_cols();
        let k = m.min(n);
        if m < n {
            let Some((q1, r1)) = economy_factors(&self.transpose(), k) else {
                return Ok(None);
            };
            Ok(solve_triangular_columns(&r1, b, true).map(|y| q1.mm(&y)))
        } else {
            let Some((q1, r1)) = economy_factors(self, k) else {
                return Ok(None);
            };
            let qtb = q1.transpose().mm(b);
            Ok(solve_triangular_columns(&r1, &qtb, false))
        }
    }

    /// Computes the inverse by solving against the identity.
    ///
    /// `Ok(None)` signals a singular matrix, exactly as in
    /// [`DenseMatrix::linear_solve`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] if the matrix is not square.
    pub fn inverse(&self) -> Result<Option<DenseMatrix>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows(),
                cols: self.num_cols(),
            });
        }
        self.linear_solve_columns(&DenseMatrix::identity(self.num_rows()))
    }
}
