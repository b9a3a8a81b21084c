//! Aberth simultaneous polynomial root finding.
//!
//! All root estimates are updated at once: each gets a Newton correction
//! `p(z)/p'(z)` coupled to the other estimates through the pairwise
//! separations `1/(z_k - z_j)`, which repels estimates from each other and
//! lets the whole set converge together. Convergence is judged per root
//! against Bini's stopping polynomial, which also yields a rigorous error
//! bound for every reported root.

use num_complex::Complex64;
use versine_poly::Poly;

use crate::complex;
use crate::error::RootError;

/// Default convergence tolerance, scaled by the stopping polynomial.
pub const DEFAULT_TOLERANCE: f64 = 1e-14;

/// Hard cap on iteration sweeps.
///
/// Not a tunable default: a polynomial that has not converged in this many
/// sweeps needs pre-filtering or rescaling by the caller, not more rounds.
pub const MAX_SWEEPS: usize = 45;

/// Angular offset of the initial estimates on their circle.
const ANGLE_OFFSET: f64 = 0.25;

/// Finds all complex roots of a real polynomial.
///
/// Coefficients are highest degree first. Roots at zero are deflated out of
/// trailing zero coefficients before the iteration starts, so they are exact.
///
/// # Errors
///
/// [`RootError::DegenerateInput`] when `p` has no nonzero coefficient, and
/// [`RootError::NoConvergence`] when the iteration cap is reached.
pub fn poly_roots(p: &Poly, tol: f64) -> Result<Vec<Complex64>, RootError> {
    poly_roots_with_bounds(p, tol).map(|(roots, _)| roots)
}

/// Like [`poly_roots`], additionally reporting a per-root error bound.
///
/// The bound for root `z` is `degree·(|p(z)| + tol·s(|z|)) / |p'(z)|`, where
/// `s` is the stopping polynomial; deflated zero roots are exact and get a
/// bound of zero.
///
/// # Errors
///
/// As for [`poly_roots`].
pub fn poly_roots_with_bounds(
    p: &Poly,
    tol: f64,
) -> Result<(Vec<Complex64>, Vec<f64>), RootError> {
    // Canonical form has already dropped leading zeros (pure reindexing);
    // what is left must have a nonzero coefficient somewhere.
    if p.is_zero() {
        return Err(RootError::DegenerateInput);
    }

    let mut coeffs = p.coeffs().to_vec();
    let mut roots = Vec::new();
    let mut bounds = Vec::new();

    // Factor x out of the polynomial once per trailing zero coefficient;
    // each contributes an exact root at the origin.
    while coeffs.len() > 1 && coeffs[coeffs.len() - 1] == 0.0 {
        coeffs.pop();
        roots.push(Complex64::new(0.0, 0.0));
        bounds.push(0.0);
    }

    let degree = coeffs.len() - 1;
    if degree == 0 {
        // A nonzero constant: nothing beyond the deflated roots.
        return Ok((roots, bounds));
    }
    if degree == 1 {
        roots.push(Complex64::new(-coeffs[1] / coeffs[0], 0.0));
        bounds.push(0.0);
        return Ok((roots, bounds));
    }

    let poly = Poly::new(coeffs);
    let deriv = poly.derivative();
    let stop = stopping_poly(&poly);
    let n = degree as f64;

    // Initial estimates on a circle centered at the root centroid
    // beta = -p[1]/(p[0]·degree), with radius the geometric mean of the
    // root distances from that center.
    let c0 = poly.coeffs()[0];
    let beta = -poly.coeffs()[1] / (c0 * n);
    let center = Complex64::new(beta, 0.0);
    let mut radius = (poly.eval(beta).abs() / c0.abs()).powf(1.0 / n);
    if radius == 0.0 {
        // The center itself is a root; any nonzero radius keeps the
        // estimates distinct.
        radius = 1.0;
    }
    let mut estimates: Vec<Complex64> = (0..degree)
        .map(|k| {
            let theta = std::f64::consts::TAU * k as f64 / n + ANGLE_OFFSET;
            center + Complex64::from_polar(radius, theta)
        })
        .collect();
    let mut done = vec![false; degree];

    for _ in 0..MAX_SWEEPS {
        let mut update = vec![Complex64::new(0.0, 0.0); degree];
        let mut all_done = true;

        for k in 0..degree {
            if done[k] {
                continue;
            }
            let z = estimates[k];
            let value = poly.eval_complex(z);
            if value.norm() <= tol * stop.eval(z.norm()) {
                // Converged roots stop moving even while others iterate.
                done[k] = true;
                continue;
            }
            all_done = false;

            let newton = complex::div(value, deriv.eval_complex(z))?;
            let mut coupling = Complex64::new(0.0, 0.0);
            for (j, &other) in estimates.iter().enumerate() {
                if j != k {
                    coupling += complex::div(Complex64::new(1.0, 0.0), z - other)?;
                }
            }
            let one = Complex64::new(1.0, 0.0);
            update[k] = complex::div(newton, one - newton * coupling)?;
        }

        if all_done {
            for &z in &estimates {
                roots.push(z);
                bounds.push(error_bound(&poly, &deriv, &stop, tol, z));
            }
            return Ok((roots, bounds));
        }

        // Every estimate moves at once, after the whole sweep is computed.
        for (z, w) in estimates.iter_mut().zip(update.iter()) {
            *z -= *w;
        }
    }

    Err(RootError::NoConvergence {
        iterations: MAX_SWEEPS,
        estimates,
    })
}

/// Filters [`poly_roots_with_bounds`] down to the real roots.
///
/// A root counts as real when its imaginary part is within `eps` of zero,
/// or within the computed error bound when no `eps` is given. Only the real
/// parts are returned.
///
/// Repeated roots converge poorly under the Aberth iteration and may keep an
/// imaginary part above their bound; such roots are excluded. That is a
/// known limitation of the method, not something this filter papers over.
///
/// # Errors
///
/// As for [`poly_roots`].
pub fn real_roots(p: &Poly, eps: Option<f64>, tol: f64) -> Result<Vec<f64>, RootError> {
    let (roots, bounds) = poly_roots_with_bounds(p, tol)?;
    Ok(roots
        .iter()
        .zip(bounds.iter())
        .filter(|(z, &bound)| z.im.abs() <= eps.unwrap_or(bound))
        .map(|(z, _)| z.re)
        .collect())
}

/// Bini's stopping polynomial: absolute coefficients weighted by
/// `4·(degree - index) + 1`, evaluated at `|z|`.
fn stopping_poly(p: &Poly) -> Poly {
    let degree = p.degree();
    Poly::new(
        p.coeffs()
            .iter()
            .enumerate()
            .map(|(i, c)| c.abs() * (4 * (degree - i) + 1) as f64)
            .collect(),
    )
}

fn error_bound(p: &Poly, deriv: &Poly, stop: &Poly, tol: f64, z: Complex64) -> f64 {
    let slope = deriv.eval_complex(z).norm();
    if slope == 0.0 {
        return f64::INFINITY;
    }
    let n = p.degree() as f64;
    n * (p.eval_complex(z).norm() + tol * stop.eval(z.norm())) / slope
}
