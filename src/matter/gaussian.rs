//! Gaussian integer backend (`a + bi` with `a`, `b` arbitrary precision)

use super::integer;
use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_complex::Complex;
use num_traits::Zero;

/// A Gaussian integer
pub type Gaussian = Complex<BigInt>;

/// Manhattan magnitude `|a| + |b|`
pub fn magnitude(z: &Gaussian) -> BigUint {
    z.re.magnitude() + z.im.magnitude()
}

/// Euclidean norm `a² + b²`
#[inline]
pub fn norm(z: &Gaussian) -> BigInt {
    z.norm_sqr()
}

/// Hurwitz division: the quotient is the lattice point nearest to `n / d`,
/// so the remainder always has a norm at most half the norm of `d`.
pub fn div_nearest(n: &Gaussian, d: &Gaussian) -> Result<(Gaussian, Gaussian)> {
    let denom = norm(d);
    if denom.is_zero() {
        return Err(Error::DivisionByZero);
    }
    // n / d = n * conj(d) / |d|²
    let scaled = n * d.conj();
    let q = Complex::new(
        integer::div_nearest(&scaled.re, &denom)?,
        integer::div_nearest(&scaled.im, &denom)?,
    );
    let r = n - d * &q;
    Ok((q, r))
}
