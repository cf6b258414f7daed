//! Arbitrary precision integer backend helpers

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};

#[inline]
pub fn magnitude(n: &BigInt) -> BigUint {
    n.magnitude().clone()
}

/// Floor division with the remainder carrying the sign of the divisor
pub fn div_floor(n: &BigInt, d: &BigInt) -> Result<(BigInt, BigInt)> {
    if d.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(n.div_mod_floor(d))
}

/// Division rounding to the nearest integer. Ties round toward zero.
pub fn div_nearest(n: &BigInt, d: &BigInt) -> Result<BigInt> {
    if d.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let (q, r) = n.div_rem(d); // truncated
    if r.abs() * 2 > d.abs() {
        if n.is_negative() != d.is_negative() {
            Ok(q - 1)
        } else {
            Ok(q + 1)
        }
    } else {
        Ok(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn div_floor_test() {
        assert_eq!(div_floor(&b(7), &b(2)).unwrap(), (b(3), b(1)));
        assert_eq!(div_floor(&b(-7), &b(2)).unwrap(), (b(-4), b(1)));
        assert_eq!(div_floor(&b(7), &b(-2)).unwrap(), (b(-4), b(-1)));
        assert_eq!(div_floor(&b(1), &b(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_nearest_test() {
        assert_eq!(div_nearest(&b(12), &b(5)).unwrap(), b(2));
        assert_eq!(div_nearest(&b(13), &b(5)).unwrap(), b(3));
        assert_eq!(div_nearest(&b(-13), &b(5)).unwrap(), b(-3));
        assert_eq!(div_nearest(&b(13), &b(-5)).unwrap(), b(-3));
        // ties go toward zero
        assert_eq!(div_nearest(&b(5), &b(2)).unwrap(), b(2));
        assert_eq!(div_nearest(&b(-5), &b(2)).unwrap(), b(-2));
    }
}
