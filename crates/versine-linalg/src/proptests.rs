//! Property-based tests for the factorization and solving pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense_matrix::{norm, DenseMatrix};
    use crate::qr::QrFactorization;

    // Dyadic entries keep products and sums exact where we want exactness.
    fn entry() -> impl Strategy<Value = f64> {
        (-100i32..100).prop_map(|n| f64::from(n) / 4.0)
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = DenseMatrix> {
        proptest::collection::vec(proptest::collection::vec(entry(), cols), rows)
            .prop_map(|rows| DenseMatrix::from_rows(rows).expect("rows are rectangular"))
    }

    // Shapes covering square, tall and wide matrices.
    fn any_shape() -> impl Strategy<Value = DenseMatrix> {
        (1usize..6, 1usize..6).prop_flat_map(|(m, n)| matrix(m, n))
    }

    fn square() -> impl Strategy<Value = DenseMatrix> {
        (1usize..6).prop_flat_map(|n| matrix(n, n))
    }

    fn max_abs_diff(a: &DenseMatrix, b: &DenseMatrix) -> f64 {
        let diff = a - b;
        let mut worst: f64 = 0.0;
        for i in 0..diff.num_rows() {
            for j in 0..diff.num_cols() {
                worst = worst.max(diff[(i, j)].abs());
            }
        }
        worst
    }

    proptest! {
        #[test]
        fn qr_reproduces_input(a in any_shape()) {
            let QrFactorization { q, r } = a.qr();
            prop_assert!(max_abs_diff(&q.mm(&r), &a) < 1e-9);
        }

        #[test]
        fn qr_q_is_orthogonal(a in any_shape()) {
            let QrFactorization { q, .. } = a.qr();
            let id = DenseMatrix::identity(a.num_rows());
            prop_assert!(max_abs_diff(&q.transpose().mm(&q), &id) < 1e-9);
        }

        #[test]
        fn qr_r_is_upper_triangular(a in any_shape()) {
            let QrFactorization { r, .. } = a.qr();
            for i in 1..r.num_rows() {
                for j in 0..i.min(r.num_cols()) {
                    prop_assert_eq!(r[(i, j)], 0.0);
                }
            }
        }

        #[test]
        fn solve_residual_is_small(
            (a, rhs) in (1usize..6).prop_flat_map(|n| {
                (matrix(n, n), proptest::collection::vec(entry(), n))
            })
        ) {
            // Rank-deficient draws legitimately return None; the property
            // binds only the solutions we do report.
            if let Some(x) = a.linear_solve(&rhs).expect("shapes agree") {
                let ax = a.mv(&x);
                let residual: Vec<f64> =
                    ax.iter().zip(rhs.iter()).map(|(u, v)| u - v).collect();
                prop_assert!(norm(&residual) <= 1e-8 * (1.0 + norm(&x)));
            }
        }

        #[test]
        fn underdetermined_solution_satisfies_system(
            cols in 2usize..6,
            seed in proptest::collection::vec(entry(), 1..6)
        ) {
            prop_assume!(seed.len() < cols);
            // One row per seed entry, cols > rows: always underdetermined.
            let rows: Vec<Vec<f64>> = seed
                .iter()
                .enumerate()
                .map(|(i, s)| (0..cols).map(|j| s + (i * cols + j) as f64).collect())
                .collect();
            let a = DenseMatrix::from_rows(rows).expect("rows are rectangular");
            let b: Vec<f64> = (0..a.num_rows()).map(|i| 1.0 + i as f64).collect();
            if let Some(x) = a.linear_solve(&b).expect("shapes agree") {
                let ax = a.mv(&x);
                let residual: Vec<f64> = ax.iter().zip(b.iter()).map(|(u, v)| u - v).collect();
                prop_assert!(norm(&residual) <= 1e-8 * (1.0 + norm(&x)));
            }
        }

        #[test]
        fn det_negates_under_row_swap(a in square(), swap in (0usize..5, 0usize..5)) {
            let n = a.num_rows();
            let (i, j) = (swap.0 % n, swap.1 % n);
            prop_assume!(i != j);
            let mut swapped = a.clone();
            swapped.swap_rows(i, j);
            // Dyadic entries make both expansions exact.
            prop_assert_eq!(swapped.det().expect("square"), -a.det().expect("square"));
        }

        #[test]
        fn det_of_product_with_identity_is_unchanged(a in square()) {
            let id = DenseMatrix::identity(a.num_rows());
            prop_assert_eq!(a.mm(&id).det().expect("square"), a.det().expect("square"));
        }
    }
}
