//! Householder QR factorization.
//!
//! Factors a rectangular matrix `A` into an orthogonal `Q` and an
//! upper-triangular `R` with `Q·R = A`. One Householder reflection per
//! column zeroes that column's sub-diagonal; the reflections accumulate into
//! `Q` while their application to the working matrix produces `R`.

use crate::dense_matrix::{dot, norm, DenseMatrix};

/// Result of a Householder QR factorization.
///
/// `q` is square orthogonal (`rows × rows`); `r` is upper-triangular with
/// the shape of the factored matrix. There is no error path: rank deficiency
/// shows up as (near-)zero diagonal entries of `r`, which callers inspect.
#[derive(Clone, Debug, PartialEq)]
pub struct QrFactorization {
    /// Orthogonal factor, `rows × rows`.
    pub q: DenseMatrix,
    /// Upper-triangular factor with the input's shape.
    pub r: DenseMatrix,
}

impl DenseMatrix {
    /// Factors the matrix as `Q·R` using Householder reflections.
    ///
    /// For an `m×n` input the loop runs over `min(m-1, n)` columns. At each
    /// column the reflection vector is taken from the active sub-column with
    /// its leading entry shifted by `-sign(pivot)·‖x‖`; taking the sign
    /// opposite the pivot avoids catastrophic cancellation when the pivot is
    /// close to the column norm. A zero sub-column leaves the un-normalized
    /// reflection vector, which degenerates to the identity reflector.
    ///
    /// After the loop the strict lower triangle of `R` is force-zeroed so
    /// residual floating-point noise cannot leak into triangular solves.
    #[must_use]
    pub fn qr(&self) -> QrFactorization {
        let m = self.num_rows();
        let n = self.num_cols();

        let mut q = DenseMatrix::identity(m);
        let mut r = self.clone();

        let steps = if m == 0 { 0 } else { (m - 1).min(n) };
        for k in 0..steps {
            // Reflection vector from the active sub-column of R.
            let x: Vec<f64> = (k..m).map(|i| r[(i, k)]).collect();
            let alpha = if x[0] >= 0.0 { -norm(&x) } else { norm(&x) };
            let mut v = x;
            v[0] -= alpha;

            let vtv = dot(&v, &v);
            if vtv == 0.0 {
                // Degenerate sub-column: the reflector is the identity.
                continue;
            }

            // H = I - 2·v·vᵗ/(vᵗ·v), embedded in the full dimension.
            let mut h = DenseMatrix::identity(m);
            for i in 0..v.len() {
                for j in 0..v.len() {
                    h[(k + i, k + j)] -= 2.0 * v[i] * v[j] / vtv;
                }
            }

            r = h.mm(&r);
            q = q.mm(&h);
        }

        for i in 1..m {
            for j in 0..i.min(n) {
                r[(i, j)] = 0.0;
            }
        }

        QrFactorization { q, r }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_close(a: &DenseMatrix, b: &DenseMatrix) {
        assert_eq!(a.num_rows(), b.num_rows());
        assert_eq!(a.num_cols(), b.num_cols());
        for i in 0..a.num_rows() {
            for j in 0..a.num_cols() {
                assert!(
                    (a[(i, j)] - b[(i, j)]).abs() < TOL,
                    "entry ({i}, {j}): {} vs {}",
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    fn check_factorization(a: &DenseMatrix) {
        let QrFactorization { q, r } = a.qr();

        // Q·R reproduces A.
        assert_close(&q.mm(&r), a);

        // Q is orthogonal.
        assert_close(&q.transpose().mm(&q), &DenseMatrix::identity(a.num_rows()));

        // R is upper-triangular, exactly.
        for i in 1..r.num_rows() {
            for j in 0..i.min(r.num_cols()) {
                assert_eq!(r[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_square() {
        let a = DenseMatrix::from_rows(vec![
            vec![2.0, -1.0, 3.0],
            vec![4.0, 0.5, -2.0],
            vec![-1.0, 7.0, 1.0],
        ])
        .unwrap();
        check_factorization(&a);
    }

    #[test]
    fn test_tall() {
        let a = DenseMatrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, -4.0],
            vec![0.5, 6.0],
            vec![-2.0, 1.0],
        ])
        .unwrap();
        check_factorization(&a);
    }

    #[test]
    fn test_wide() {
        let a =
            DenseMatrix::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, -6.0, 7.0, 0.5]])
                .unwrap();
        check_factorization(&a);
    }

    #[test]
    fn test_near_cancellation_pivot() {
        // Pivot close to the column norm: the sign convention keeps the
        // reflection vector well away from zero.
        let a = DenseMatrix::from_rows(vec![vec![1.0, 1.0], vec![1e-9, 1.0]]).unwrap();
        check_factorization(&a);
    }

    #[test]
    fn test_zero_column() {
        let a = DenseMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 3.0, 4.0],
            vec![0.0, 5.0, 6.0],
        ])
        .unwrap();
        check_factorization(&a);
    }

    #[test]
    fn test_rank_deficient_diagonal() {
        // Rank-1 matrix: some diagonal entry of R must (numerically) vanish.
        let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let QrFactorization { r, .. } = a.qr();
        let min_diag = (0..2).map(|i| r[(i, i)].abs()).fold(f64::INFINITY, f64::min);
        assert!(min_diag < 1e-12);
    }
}
