//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored highest degree first, the order in which the
//! kernel's callers build polynomials. Construction normalizes to canonical
//! form by trimming leading zeros; the empty vector is the zero polynomial.

use num_complex::Complex64;

use crate::error::PolyError;

/// A dense univariate polynomial with `f64` coefficients.
///
/// Highest-degree coefficient first; `coeffs.len() == degree + 1` for a
/// nonzero polynomial, and the zero polynomial is empty.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Poly {
    /// Coefficients in descending degree order.
    coeffs: Vec<f64>,
}

impl Poly {
    /// Creates a polynomial from coefficients, trimming leading zeros.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }.trimmed(0.0)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial `c·xⁿ`.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[0] = c;
        Self::new(coeffs)
    }

    /// Returns the degree; the zero polynomial reports 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<f64> {
        self.coeffs.first().copied()
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a real point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for &c in &self.coeffs {
            acc = acc * x + c;
        }
        acc
    }

    /// Evaluates the polynomial at a complex point using Horner's method.
    #[must_use]
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        let mut acc = Complex64::new(0.0, 0.0);
        for &c in &self.coeffs {
            acc = acc * z + c;
        }
        acc
    }

    /// Adds two polynomials.
    ///
    /// The shorter coefficient sequence is aligned by degree (zero-padded in
    /// the high-degree positions), summed elementwise, and the result is
    /// trimmed in case the leading terms cancel.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            // Offset from the end aligns equal degrees.
            let a = pad_get(&self.coeffs, len, i);
            let b = pad_get(&other.coeffs, len, i);
            result.push(a + b);
        }
        Self::new(result)
    }

    /// Negates the polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by coefficient convolution.
    ///
    /// The raw convolution has length `len(p) + len(q) - 1`; the result is
    /// trimmed, so multiplying by zero yields the empty polynomial.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut result = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        Self::new(result)
    }

    /// Multiplies out a sequence of polynomials, reducing pairwise.
    ///
    /// The empty product is the constant 1.
    #[must_use]
    pub fn product<'a, I>(factors: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        factors
            .into_iter()
            .fold(Self::one(), |acc, p| acc.mul(p))
    }

    /// Polynomial long division: `self = q·d + r` with `deg r < deg d`.
    ///
    /// Either part may come back as the zero (empty) polynomial.
    ///
    /// # Errors
    ///
    /// [`PolyError::InvalidDivisor`] when `d` is the zero polynomial.
    pub fn div_rem(&self, d: &Self) -> Result<(Self, Self), PolyError> {
        let Some(lead) = d.leading_coeff() else {
            return Err(PolyError::InvalidDivisor);
        };
        if self.coeffs.len() < d.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let mut rem = self.coeffs.clone();
        let quot_len = rem.len() - d.coeffs.len() + 1;
        let mut quot = vec![0.0; quot_len];
        for i in 0..quot_len {
            let factor = rem[i] / lead;
            quot[i] = factor;
            if factor != 0.0 {
                for (j, dc) in d.coeffs.iter().enumerate() {
                    rem[i + j] -= factor * dc;
                }
            }
        }
        Ok((Self::new(quot), Self::new(rem[quot_len..].to_vec())))
    }

    /// Strips leading coefficients within `eps` of zero.
    ///
    /// With `eps = 0` only exact zeros are removed; an all-zero polynomial
    /// trims to the empty (zero) polynomial.
    #[must_use]
    pub fn trimmed(mut self, eps: f64) -> Self {
        let keep = self
            .coeffs
            .iter()
            .position(|c| c.abs() > eps)
            .unwrap_or(self.coeffs.len());
        self.coeffs.drain(..keep);
        self
    }

    /// Returns the derivative polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let degree = self.degree();
        Self::new(
            self.coeffs[..degree]
                .iter()
                .enumerate()
                .map(|(i, c)| c * (degree - i) as f64)
                .collect(),
        )
    }
}

/// Reads coefficient `i` of `coeffs` as if left-padded with zeros to `len`.
fn pad_get(coeffs: &[f64], len: usize, i: usize) -> f64 {
    let pad = len - coeffs.len();
    if i < pad {
        0.0
    } else {
        coeffs[i - pad]
    }
}
