//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are drawn from small integers so that every operation under
//! test is exact in `f64`; the algebraic laws can then be asserted with
//! equality instead of tolerances.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Poly;

    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20).prop_map(f64::from)
    }

    fn small_poly() -> impl Strategy<Value = Poly> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Poly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Poly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Monic divisors keep long division exact.
    fn monic_poly() -> impl Strategy<Value = Poly> {
        proptest::collection::vec(small_coeff(), 0..=4).prop_map(|mut tail| {
            let mut coeffs = vec![1.0];
            coeffs.append(&mut tail);
            Poly::new(coeffs)
        })
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&Poly::zero()), a.clone());
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Poly::one()), a.clone());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            let product = a.mul(&b);
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_mul_length(a in nonzero_poly(), b in nonzero_poly()) {
            // The convolution length before trimming is len(a) + len(b) - 1;
            // with integer coefficients the leading product cannot cancel.
            let product = a.mul(&b);
            prop_assert_eq!(
                product.coeffs().len(),
                a.coeffs().len() + b.coeffs().len() - 1
            );
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -4i32..=4) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).eval(x), a.eval(x) + b.eval(x));
        }

        // Division round-trip: divide(multiply(q, d), d) == (q, 0)

        #[test]
        fn poly_div_recovers_quotient(q in small_poly(), d in monic_poly()) {
            let n = q.mul(&d);
            let (quot, rem) = n.div_rem(&d).expect("divisor is monic, not zero");
            prop_assert_eq!(quot, q);
            prop_assert!(rem.is_zero());
        }

        #[test]
        fn poly_div_rem_reconstructs(n in small_poly(), d in monic_poly()) {
            let (quot, rem) = n.div_rem(&d).expect("divisor is monic, not zero");
            prop_assert!(rem.is_zero() || rem.degree() < d.degree());
            prop_assert_eq!(quot.mul(&d).add(&rem), n);
        }

        // Derivative linearity

        #[test]
        fn derivative_of_sum(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(
                a.add(&b).derivative(),
                a.derivative().add(&b.derivative())
            );
        }
    }
}
