//! Term generators for closed-form sources, based on the Euclidean algorithm

use crate::error::{Error, Result};
use crate::matter::Value;
use crate::traits::Matter;
use tracing::trace;

#[cfg(feature = "complex")]
use crate::matter::gaussian::Gaussian;

/// How each Euclidean step rounds the quotient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Floor division, giving a simple continued fraction
    Floor,
    /// Round to the nearest lattice point (Hurwitz division)
    Nearest,
}

/// Iterator of the continued fraction terms of `numer / denom`.
///
/// Each step yields `q = round(numer / denom)` and continues with
/// `(denom, numer - q * denom)` until the remainder is zero.
#[derive(Debug, Clone)]
pub struct Euclid {
    numer: Value,
    denom: Value,
    rounding: Rounding,
    steps: usize,
    failed: bool,
}

impl Euclid {
    pub fn new(numer: Value, denom: Value, rounding: Rounding) -> Result<Self> {
        if Matter::is_zero(&denom) {
            return Err(Error::DivisionByZero);
        }
        Ok(Euclid {
            numer,
            denom,
            rounding,
            steps: 0,
            failed: false,
        })
    }

    /// Simple continued fraction of a rational number
    pub fn rational<N: Into<Value>, D: Into<Value>>(numer: N, denom: D) -> Result<Self> {
        Euclid::new(numer.into(), denom.into(), Rounding::Floor)
    }

    /// Hurwitz continued fraction of a Gaussian rational
    #[cfg(feature = "complex")]
    pub fn hurwitz(numer: Gaussian, denom: Gaussian) -> Result<Self> {
        Euclid::new(Value::Gaussian(numer), Value::Gaussian(denom), Rounding::Nearest)
    }

    /// The pending pair `(numer, denom)`
    pub fn state(&self) -> (&Value, &Value) {
        (&self.numer, &self.denom)
    }
}

impl Iterator for Euclid {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Result<Value>> {
        if self.failed || Matter::is_zero(&self.denom) {
            return None;
        }
        let step = match self.rounding {
            Rounding::Floor => self.numer.div_floor(&self.denom),
            Rounding::Nearest => self.numer.div_nearest(&self.denom),
        };
        match step {
            // only the leading quotient may be zero, a later one means the
            // division did not reduce the remainder (non-monic polynomials)
            Ok((q, _)) if self.steps > 0 && Matter::is_zero(&q) => {
                self.failed = true;
                Some(Err(Error::IncompatibleBackend {
                    op: "euclid",
                    lhs: self.numer.backend().name(),
                    rhs: self.denom.backend().name(),
                }))
            }
            Ok((q, r)) => {
                trace!(term = %q, "euclid step");
                self.steps += 1;
                self.numer = std::mem::replace(&mut self.denom, r);
                Some(Ok(q))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
