//! Polynomial backend with arbitrary precision integer coefficients

use crate::error::{Error, Result};
use crate::traits::Matter;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// A polynomial `c0 + c1 x + c2 x² + ..`, stored lowest degree first.
///
/// Trailing zero coefficients are trimmed, but at least one coefficient is
/// always kept so the zero polynomial is `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<BigInt>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        let mut coeffs = coeffs;
        while coeffs.len() > 1 && coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(BigInt::zero());
        }
        Polynomial { coeffs }
    }

    /// Constant polynomial
    pub fn constant(c: BigInt) -> Self {
        Polynomial { coeffs: vec![c] }
    }

    #[inline]
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Degree of the polynomial, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        if Matter::is_zero(self) {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// The constant value if the polynomial has degree 0
    pub fn as_constant(&self) -> Option<&BigInt> {
        if self.coeffs.len() == 1 {
            self.coeffs.first()
        } else {
            None
        }
    }

    #[inline]
    fn lead(&self) -> &BigInt {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Evaluate with Horner's scheme
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coeffs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    pub fn add(&self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = BigInt::zero();
        let coeffs = (0..len)
            .map(|i| self.coeffs.get(i).unwrap_or(&zero) + rhs.coeffs.get(i).unwrap_or(&zero))
            .collect();
        Polynomial::new(coeffs)
    }

    pub fn neg(&self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    pub fn mul(&self, rhs: &Polynomial) -> Polynomial {
        let mut coeffs = vec![BigInt::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }

    /// Long division over the integers.
    ///
    /// Each step divides the leading coefficients with truncation; the loop
    /// stops once the remainder has lower degree than the divisor, or when the
    /// leading quotient truncates to zero. The identity
    /// `self = quotient * rhs + remainder` always holds.
    pub fn div_rem(&self, rhs: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        if Matter::is_zero(rhs) {
            return Err(Error::DivisionByZero);
        }
        let mut rem = self.coeffs.clone();
        let mut quo = vec![BigInt::zero(); self.coeffs.len()];
        let lead = rhs.lead();
        let deg = rhs.coeffs.len() - 1;

        while rem.len() > deg && !(rem.len() == 1 && rem[0].is_zero()) {
            let shift = rem.len() - 1 - deg;
            let factor = &rem[rem.len() - 1] / lead;
            if factor.is_zero() {
                break;
            }
            for (i, c) in rhs.coeffs.iter().enumerate() {
                rem[i + shift] -= c * &factor;
            }
            quo[shift] += factor;
            while rem.len() > 1 && rem.last().map_or(false, |c| c.is_zero()) {
                rem.pop();
            }
        }
        Ok((Polynomial::new(quo), Polynomial::new(rem)))
    }
}

impl Matter for Polynomial {
    fn magnitude(&self) -> BigUint {
        self.coeffs.iter().map(|c| c.magnitude()).sum()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }
}

impl From<BigInt> for Polynomial {
    fn from(c: BigInt) -> Self {
        Polynomial::constant(c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Matter::is_zero(self) {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let m = c.abs();
            if !m.is_one() || i == 0 {
                write!(f, "{}", m)?;
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(coeffs: &[i64]) -> Polynomial {
        Polynomial::new(coeffs.iter().map(|&c| BigInt::from(c)).collect())
    }

    #[test]
    fn creation_test() {
        assert_eq!(p(&[1, 2, 0, 0]).coeffs().len(), 2);
        assert_eq!(p(&[0, 0]), p(&[]));
        assert_eq!(p(&[]).degree(), None);
        assert_eq!(p(&[3, 0, 1]).degree(), Some(2));
        assert_eq!(p(&[7]).as_constant(), Some(&BigInt::from(7)));
    }

    #[test]
    fn arithmetic_test() {
        // (x - 1)(x + 1) = x² - 1
        assert_eq!(p(&[-1, 1]).mul(&p(&[1, 1])), p(&[-1, 0, 1]));
        assert_eq!(p(&[1, 2]).add(&p(&[3, -2])), p(&[4]));
        assert_eq!(p(&[1, -2]).neg(), p(&[-1, 2]));
        assert_eq!(p(&[-2, 0, 1]).evaluate(&BigInt::from(3)), BigInt::from(7));
    }

    #[test]
    fn div_rem_test() {
        let (q, r) = p(&[-1, 0, 1]).div_rem(&p(&[-1, 1])).unwrap();
        assert_eq!((q, r), (p(&[1, 1]), p(&[0])));

        // 2x² + 3x + 5 = (x + 1)(2x + 1) + 4
        let (q, r) = p(&[5, 3, 2]).div_rem(&p(&[1, 1])).unwrap();
        assert_eq!((q, r), (p(&[1, 2]), p(&[4])));

        // leading coefficient does not divide: stops without progress
        let (q, r) = p(&[0, 2]).div_rem(&p(&[0, 3])).unwrap();
        assert_eq!((q, r), (p(&[0]), p(&[0, 2])));

        assert_eq!(p(&[1]).div_rem(&p(&[0])), Err(Error::DivisionByZero));
    }

    #[test]
    fn matter_test() {
        assert_eq!(p(&[-3, 0, 4]).magnitude(), BigUint::from(7u32));
        assert!(Matter::is_zero(&p(&[0, 0, 0])));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", p(&[-1, 0, 1])), "x^2 - 1");
        assert_eq!(format!("{}", p(&[3, -2])), "-2x + 3");
        assert_eq!(format!("{}", p(&[0])), "0");
    }
}
