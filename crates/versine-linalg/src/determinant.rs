//! Determinants of small square matrices.
//!
//! 2×2 and 3×3 matrices use the closed formulas, which are both cheaper and
//! numerically tighter than general expansion. Larger matrices fall back to
//! cofactor expansion along the first column. The cost of that expansion is
//! factorial in the size; this is a deliberate scope limit of the kernel,
//! which only ever sees small matrices.

use crate::dense_matrix::DenseMatrix;
use crate::error::LinalgError;

impl DenseMatrix {
    /// Computes the determinant.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] if the matrix is not square.
    pub fn det(&self) -> Result<f64, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows(),
                cols: self.num_cols(),
            });
        }
        Ok(det_unchecked(self))
    }
}

fn det_unchecked(m: &DenseMatrix) -> f64 {
    match m.num_rows() {
        0 => 1.0,
        1 => m[(0, 0)],
        2 => det2(m),
        3 => det3(m),
        n => {
            // Cofactor expansion along the first column.
            let mut sum = 0.0;
            let mut sign = 1.0;
            for row in 0..n {
                let entry = m[(row, 0)];
                if entry != 0.0 {
                    sum += sign * entry * det_unchecked(&first_column_minor(m, row));
                }
                sign = -sign;
            }
            sum
        }
    }
}

fn det2(m: &DenseMatrix) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

fn det3(m: &DenseMatrix) -> f64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// The minor obtained by deleting `skip_row` and the first column.
fn first_column_minor(m: &DenseMatrix, skip_row: usize) -> DenseMatrix {
    let n = m.num_rows();
    let mut minor = DenseMatrix::zeros(n - 1, n - 1);
    let mut r = 0;
    for row in 0..n {
        if row == skip_row {
            continue;
        }
        for col in 1..n {
            minor[(r, col - 1)] = m[(row, col)];
        }
        r += 1;
    }
    minor
}
