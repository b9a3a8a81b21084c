//! Checked complex arithmetic.
//!
//! Multiplication comes straight from `num_complex`; only division needs a
//! guard, because `num_complex` follows IEEE semantics and hands back
//! NaN/infinity components where the kernel wants a hard failure.

use num_complex::Complex64;

use crate::error::RootError;

/// Complex division that fails instead of overflowing to NaN or infinity.
///
/// # Errors
///
/// [`RootError::DivisionByZero`] when `z2` is exactly `0 + 0i` (the
/// denominator `re² + im²` vanishes).
pub fn div(z1: Complex64, z2: Complex64) -> Result<Complex64, RootError> {
    if z2.re == 0.0 && z2.im == 0.0 {
        return Err(RootError::DivisionByZero);
    }
    Ok(z1 / z2)
}
