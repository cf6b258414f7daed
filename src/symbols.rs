//! Predefined irrational constants and named transcendental functions

use crate::cont_frac::{exp, ln1p, Block, GeneralContinuedFraction, Pump};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{Num, One, Signed, Zero};

/// Euler's number
#[derive(Debug, Clone, Copy, Default)]
pub struct E {}

impl E {
    /// The regular pattern `[2; 1, 2, 1, 1, 4, 1, 1, 6, ..]`
    pub fn cfrac<T: Num + Clone>(&self) -> ECoefficients<T> {
        ECoefficients {
            even: T::one() + T::one(),
            pos: 0,
        }
    }
}

/// Iterator of [E::cfrac()]
#[derive(Debug, Clone)]
pub struct ECoefficients<T> {
    even: T,
    pos: usize,
}

impl<T: Num + Clone> Iterator for ECoefficients<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let pos = self.pos;
        self.pos += 1;
        // after the leading 2 the terms repeat as 1, 2k, 1
        match pos {
            0 => Some(T::one() + T::one()),
            p if p % 3 == 2 => {
                let term = self.even.clone();
                self.even = self.even.clone() + T::one() + T::one();
                Some(term)
            }
            _ => Some(T::one()),
        }
    }
}

/// Archimedes' constant
#[derive(Debug, Clone, Copy, Default)]
pub struct Pi {}

impl Pi {
    /// Generalized continued fraction of `π - 3`:
    /// `1² / (6 + 3² / (6 + 5² / (6 + ..)))`
    pub fn gcf(&self) -> PiCoefficients {
        PiCoefficients { n: 0 }
    }
}

/// Iterator of [Pi::gcf()]
#[derive(Debug, Clone)]
pub struct PiCoefficients {
    n: u64,
}

impl Iterator for PiCoefficients {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let result = if self.n == 0 {
            (BigInt::one(), BigInt::zero())
        } else {
            let odd = BigInt::from(2 * self.n + 1);
            (&odd * &odd, BigInt::from(6))
        };
        self.n += 1;
        Some(result)
    }
}

/// A transcendental value expanded through the matrix pump
#[derive(Debug, Clone, PartialEq)]
pub enum Transcendental {
    /// Natural logarithm of a positive rational
    Ln(Ratio<BigInt>),
    /// Exponential of a rational
    Exp(Ratio<BigInt>),
    E,
    Pi,
}

impl Transcendental {
    /// Build the pump producing the simple continued fraction of the value
    pub fn pump(&self, config: EngineConfig) -> Result<Pump> {
        let negate = || Block::new(-BigInt::one(), BigInt::zero(), BigInt::zero(), BigInt::one());
        let recip = || Block::new(BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());

        match self {
            Transcendental::Ln(r) => {
                if !r.is_positive() {
                    return Err(Error::InvalidMagnitude(format!("ln({})", r)));
                }
                let (n, d) = (r.numer(), r.denom());
                if n >= d {
                    Ok(ln1p(n - d, d.clone()).simplify_with(Block::identity(), config))
                } else {
                    // ln(r) = -ln(1/r)
                    Ok(ln1p(d - n, n.clone()).simplify_with(negate(), config))
                }
            }
            Transcendental::Exp(r) => {
                let (n, d) = (r.numer(), r.denom());
                if n.is_negative() {
                    // exp(r) = 1 / exp(-r)
                    Ok(exp(-n, d.clone()).simplify_with(recip(), config))
                } else {
                    Ok(exp(n.clone(), d.clone()).simplify_with(Block::identity(), config))
                }
            }
            Transcendental::E => Ok(exp(BigInt::one(), BigInt::one()).simplify_with(Block::identity(), config)),
            Transcendental::Pi => {
                let plus_three = Block::new(BigInt::one(), BigInt::from(3), BigInt::zero(), BigInt::one());
                Ok(Pi {}.gcf().simplify_with(plus_three, config))
            }
        }
    }
}
