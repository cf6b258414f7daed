//! Implementation of lazily evaluated simple continued fractions

use super::bihomo::{Gosper, Op};
use super::block::{Block, DualBlock};
use super::euclid::Euclid;
use super::general::Pump;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::matter::Value;
use crate::stream::Stream;
use crate::symbols::Transcendental;
use crate::traits::Approximation;
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{One, Zero};
use core::iter;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "complex")]
use crate::matter::gaussian::Gaussian;

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// whose coefficients are produced on demand. a0 is a signed integer, a1, a2, ..
/// are positive integers.
///
/// Arithmetic between values builds a new [Gosper] engine over both term streams,
/// no term is computed until the result is iterated. Cloning a value gives an
/// independent cursor over the same terms.
#[derive(Clone)]
pub struct ContinuedFraction {
    terms: Stream<BigInt>,
    config: EngineConfig,
}

impl ContinuedFraction {
    pub fn from_stream(terms: Stream<BigInt>) -> Self {
        ContinuedFraction {
            terms,
            config: EngineConfig::default(),
        }
    }

    /// Create a continued fraction from a finite list of coefficients
    pub fn from_terms<T: Into<BigInt>>(terms: Vec<T>) -> Self {
        Self::from_stream(Stream::from_terms(terms.into_iter().map(Into::into).collect()))
    }

    /// Expand `numer / denom` with the Euclidean algorithm. The operands may
    /// come from any real backend, mixed backends are promoted first.
    pub fn rational<N: Into<Value>, D: Into<Value>>(numer: N, denom: D) -> Result<Self> {
        let terms = Euclid::rational(numer, denom)?.map(|t| t.and_then(|v| v.to_integer()));
        Ok(Self::from_stream(Stream::new(terms)))
    }

    pub fn transcendental(value: Transcendental) -> Result<Self> {
        Self::transcendental_with(value, EngineConfig::default())
    }

    /// Like [transcendental()][Self::transcendental], with the pump and every
    /// engine spawned from the value running under `config`
    pub fn transcendental_with(value: Transcendental, config: EngineConfig) -> Result<Self> {
        Ok(Self::from_stream(Stream::new(value.pump(config)?)).with_config(config))
    }

    /// Natural logarithm of a positive rational
    pub fn ln(r: Ratio<BigInt>) -> Result<Self> {
        Self::transcendental(Transcendental::Ln(r))
    }

    pub fn exp(r: Ratio<BigInt>) -> Result<Self> {
        Self::transcendental(Transcendental::Exp(r))
    }

    /// Set the configuration handed to the engines spawned from this value.
    /// It does not affect a pump that already backs the value, use
    /// [transcendental_with()][Self::transcendental_with] for that.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Combine two values with an arithmetic operator
    pub fn combine(self, rhs: ContinuedFraction, op: Op) -> Self {
        self.bihomo(rhs, op.block())
    }

    /// This method returns a bihomographic function result on the fraction
    /// A bihomographic function is `(axy + bx + cy + d)/(exy + fx + gy + h)`
    pub fn bihomo(self, rhs: ContinuedFraction, block: DualBlock) -> Self {
        let config = self.config.strictest(rhs.config);
        let engine = Gosper::with_block(self.terms, rhs.terms, block, config);
        Self::from_stream(Stream::new(engine)).with_config(config)
    }

    /// This method returns a homographic function result on the fraction
    /// A homographic function is `(px + q)/(rx + s)`
    pub fn homo(self, p: BigInt, q: BigInt, r: BigInt, s: BigInt) -> Self {
        let config = self.config;
        let pump = Pump::new(self.generalize(), Block::new(p, q, r, s), config);
        Self::from_stream(Stream::new(pump)).with_config(config)
    }

    /// A fresh cursor over the coefficients
    #[inline]
    pub fn terms(&self) -> Stream<BigInt> {
        self.terms.clone()
    }

    /// At most `max` leading coefficients
    pub fn take_terms(&self, max: usize) -> Result<Vec<BigInt>> {
        self.terms().take(max).collect()
    }

    /// At most `max` leading coefficients, marked complete when the value ended
    pub fn prefix(&self, max: usize) -> Result<Prefix> {
        let mut cursor = self.terms();
        let terms = cursor.by_ref().take(max).collect::<Result<Vec<_>>>()?;
        let complete = cursor.peek()?.is_none();
        Ok(Prefix { terms, complete })
    }

    /// Returns an iterator of generalized coefficients `(1, a_k)`, that can be
    /// consumed by the matrix pump
    pub fn generalize(&self) -> Stream<(BigInt, BigInt)> {
        Stream::new(self.terms().map(|t| t.map(|a| (BigInt::one(), a))))
    }

    /// Returns an iterator of the convergents
    pub fn convergents(&self) -> Convergents {
        Convergents {
            terms: self.terms(),
            block: Block::identity(),
        }
    }

    /// The value as a rational, using at most `max_terms` coefficients.
    /// It's exact if the continued fraction ended within the limit.
    pub fn to_rational(&self, max_terms: usize) -> Result<Approximation<Ratio<BigInt>>> {
        let mut cursor = self.terms();
        let mut block = Block::identity();
        for _ in 0..max_terms.max(1) {
            match cursor.consume()? {
                Some(a) => block.rmove(&a),
                None => break,
            }
        }
        let value = block.convergent().ok_or(Error::ExhaustedStreamMisuse)?;
        if cursor.is_exhausted() || cursor.peek()?.is_none() {
            Ok(Approximation::Exact(value))
        } else {
            Ok(Approximation::Approximated(value))
        }
    }
}

impl fmt::Debug for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuedFraction")
            .field("state", &self.terms.state())
            .field("config", &self.config)
            .finish()
    }
}

/// Leading coefficients of a [ContinuedFraction], displayed as `[a0; a1, a2, ..]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub terms: Vec<BigInt>,
    /// No coefficient follows the ones collected
    pub complete: bool,
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.terms.iter();
        match iter.next() {
            Some(a0) => write!(f, "[{}", a0)?,
            None => return write!(f, "[]"),
        }
        if let Some(a1) = iter.next() {
            write!(f, "; {}", a1)?;
        }
        for a in iter {
            write!(f, ", {}", a)?;
        }
        if self.complete {
            write!(f, "]")
        } else if self.terms.len() > 1 {
            write!(f, ", ...]")
        } else {
            write!(f, "; ...]")
        }
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Clone)]
pub struct Convergents {
    terms: Stream<BigInt>,
    block: Block,
}

impl Iterator for Convergents {
    type Item = Result<Ratio<BigInt>>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = match self.terms.next()? {
            Ok(a) => a,
            Err(e) => return Some(Err(e)),
        };
        self.block.rmove(&a);
        self.block.convergent().map(Ok)
    }
}

/// Normalize a finite coefficient list, so that equal rationals get equal lists.
///
/// `[.., a, 0, b, ..]` is merged into `[.., a + b, ..]`, a trailing `[.., a, 0]`
/// pair is dropped and a trailing 1 is folded into the term before it.
pub fn canonical(terms: Vec<BigInt>) -> Vec<BigInt> {
    let mut dedup: Vec<BigInt> = Vec::with_capacity(terms.len());
    for a in terms {
        let merge = dedup.len() > 1 && dedup.last().map_or(false, Zero::is_zero);
        if merge {
            dedup.pop(); // the zero
            if let Some(last) = dedup.last_mut() {
                *last += a;
            }
        } else {
            dedup.push(a);
        }
    }

    while dedup.len() >= 2 {
        let n = dedup.len();
        if dedup[n - 1].is_zero() && n >= 3 {
            dedup.truncate(n - 2);
        } else if dedup[n - 1].is_one() {
            dedup.pop();
            dedup[n - 2] += BigInt::one();
        } else {
            break;
        }
    }
    dedup
}

/// Back-substitute finite coefficients into a rational. None if the value is infinite.
pub fn reconstruct(terms: &[BigInt]) -> Option<Ratio<BigInt>> {
    let mut block = Block::identity();
    for a in terms {
        block.rmove(a);
    }
    block.convergent()
}

impl From<BigInt> for ContinuedFraction {
    fn from(n: BigInt) -> Self {
        Self::from_terms(vec![n])
    }
}

impl From<i64> for ContinuedFraction {
    fn from(n: i64) -> Self {
        Self::from_terms(vec![n])
    }
}

impl From<Ratio<BigInt>> for ContinuedFraction {
    fn from(r: Ratio<BigInt>) -> Self {
        let (n, d): (BigInt, BigInt) = r.into();
        // a ratio never has a zero denominator, the error only guards the stream
        Self::rational(n, d).unwrap_or_else(|e| Self::from_stream(Stream::new(iter::once(Err(e)))))
    }
}

impl Neg for ContinuedFraction {
    type Output = ContinuedFraction;

    fn neg(self) -> Self::Output {
        self.homo(-BigInt::one(), BigInt::zero(), BigInt::zero(), BigInt::one())
    }
}

macro_rules! impl_binop {
    (impl $imp:ident, $method:ident, $op:expr) => {
        impl $imp<ContinuedFraction> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: ContinuedFraction) -> ContinuedFraction {
                self.combine(rhs, $op)
            }
        }

        impl<'a, 'b> $imp<&'b ContinuedFraction> for &'a ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: &'b ContinuedFraction) -> ContinuedFraction {
                self.clone().combine(rhs.clone(), $op)
            }
        }

        impl $imp<i64> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: i64) -> ContinuedFraction {
                self.combine(ContinuedFraction::from(rhs), $op)
            }
        }

        impl $imp<BigInt> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: BigInt) -> ContinuedFraction {
                self.combine(ContinuedFraction::from(rhs), $op)
            }
        }
    };
}

impl_binop!(impl Add, add, Op::Add);
impl_binop!(impl Sub, sub, Op::Sub);
impl_binop!(impl Mul, mul, Op::Mul);
impl_binop!(impl Div, div, Op::Div);

/// Continued fraction of a Gaussian rational, expanded with Hurwitz division.
/// Its coefficients are Gaussian integers.
#[cfg(feature = "complex")]
#[derive(Clone)]
pub struct GaussianFraction {
    terms: Stream<Gaussian>,
}

#[cfg(feature = "complex")]
impl GaussianFraction {
    pub fn new(numer: Gaussian, denom: Gaussian) -> Result<Self> {
        let terms = Euclid::hurwitz(numer, denom)?.map(|t| t.and_then(|v| v.to_gaussian()));
        Ok(GaussianFraction {
            terms: Stream::new(terms),
        })
    }

    #[inline]
    pub fn terms(&self) -> Stream<Gaussian> {
        self.terms.clone()
    }

    pub fn take_terms(&self, max: usize) -> Result<Vec<Gaussian>> {
        self.terms().take(max).collect()
    }

    /// Back-substitute at most `max_terms` coefficients into `(numer, denom)`.
    /// The pair is not reduced.
    pub fn to_ratio(&self, max_terms: usize) -> Result<Approximation<(Gaussian, Gaussian)>> {
        let one = Gaussian::one();
        let zero = Gaussian::zero();
        // p_(k-1), p_(k-2), q_(k-1), q_(k-2)
        let (mut pm1, mut pm2, mut qm1, mut qm2) = (one.clone(), zero.clone(), zero, one);

        let mut cursor = self.terms();
        for _ in 0..max_terms {
            match cursor.consume()? {
                Some(a) => {
                    let p = &a * &pm1 + &pm2;
                    let q = &a * &qm1 + &qm2;
                    pm2 = std::mem::replace(&mut pm1, p);
                    qm2 = std::mem::replace(&mut qm1, q);
                }
                None => break,
            }
        }
        if cursor.is_exhausted() || cursor.peek()?.is_none() {
            Ok(Approximation::Exact((pm1, qm1)))
        } else {
            Ok(Approximation::Approximated((pm1, qm1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matter::Tally;
    use crate::symbols::E;
    use core::iter;

    fn b(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn ints(v: &[i64]) -> Vec<BigInt> {
        v.iter().map(|&i| BigInt::from(i)).collect()
    }

    fn ratio(n: i64, d: i64) -> Ratio<BigInt> {
        Ratio::new(b(n), b(d))
    }

    fn rational(n: i64, d: i64) -> ContinuedFraction {
        ContinuedFraction::rational(n, d).unwrap()
    }

    fn e() -> ContinuedFraction {
        ContinuedFraction::from_stream(Stream::new(E {}.cfrac::<BigInt>().map(Ok)))
    }

    fn sqrt2() -> ContinuedFraction {
        let terms = iter::once(1).chain(iter::repeat(2)).map(BigInt::from).map(Ok);
        ContinuedFraction::from_stream(Stream::new(terms))
    }

    #[test]
    fn cont_frac_creation_test() {
        assert_eq!(rational(355, 113).take_terms(10), Ok(ints(&[3, 7, 16])));
        assert_eq!(rational(-22, 7).take_terms(10), Ok(ints(&[-4, 1, 6])));
        assert_eq!(ContinuedFraction::from(ratio(7, 22)).take_terms(10), Ok(ints(&[0, 3, 7])));
        assert_eq!(ContinuedFraction::from(ratio(-7, 22)).take_terms(10), Ok(ints(&[-1, 1, 2, 7])));
        assert_eq!(ContinuedFraction::from(-5).take_terms(10), Ok(ints(&[-5])));
        assert!(matches!(ContinuedFraction::rational(1, 0), Err(Error::DivisionByZero)));
        assert_eq!(
            ContinuedFraction::from(ratio(-415, 93)).take_terms(10),
            rational(-415, 93).take_terms(10)
        );

        let tally = |n| Tally::unsigned(n).unwrap();
        let t = ContinuedFraction::rational(tally(355), tally(113)).unwrap();
        assert_eq!(t.take_terms(10), rational(355, 113).take_terms(10));
    }

    #[test]
    fn cont_frac_iter_test() {
        let sq2 = sqrt2();
        assert_eq!(
            sq2.convergents().take(5).collect::<Result<Vec<_>>>(),
            Ok(vec![ratio(1, 1), ratio(3, 2), ratio(7, 5), ratio(17, 12), ratio(41, 29)])
        );
        // the value itself is not advanced by its cursors
        assert_eq!(sq2.take_terms(3), Ok(ints(&[1, 2, 2])));
        assert_eq!(sq2.take_terms(3), Ok(ints(&[1, 2, 2])));

        let n = rational(-7, 3);
        assert_eq!(
            n.convergents().collect::<Result<Vec<_>>>(),
            Ok(vec![ratio(-3, 1), ratio(-2, 1), ratio(-7, 3)])
        );
    }

    #[test]
    fn cont_frac_conversion_test() {
        assert_eq!(rational(355, 113).to_rational(10), Ok(Approximation::Exact(ratio(355, 113))));
        assert_eq!(rational(355, 113).to_rational(3), Ok(Approximation::Exact(ratio(355, 113))));
        assert_eq!(rational(355, 113).to_rational(2), Ok(Approximation::Approximated(ratio(22, 7))));
        assert_eq!(e().to_rational(5), Ok(Approximation::Approximated(ratio(19, 7))));
        assert_eq!(rational(0, 3).to_rational(0), Ok(Approximation::Exact(ratio(0, 1))));
        assert_eq!(
            ContinuedFraction::from_terms(Vec::<i64>::new()).to_rational(3),
            Err(Error::ExhaustedStreamMisuse)
        );
    }

    #[test]
    fn canonical_test() {
        assert_eq!(canonical(ints(&[0, 1, 0, 0, 2])), ints(&[0, 1, 2]));
        assert_eq!(canonical(ints(&[0, 1, 1, 0, 1])), ints(&[0, 1, 2]));
        assert_eq!(canonical(ints(&[2, 1, 0, 2, 4])), ints(&[2, 3, 4]));
        assert_eq!(canonical(ints(&[3, 7, 15, 1])), ints(&[3, 7, 16]));
        assert_eq!(canonical(ints(&[0, 1, 1])), ints(&[0, 2]));
        assert_eq!(canonical(ints(&[4, 2, 0])), ints(&[4]));
        assert_eq!(canonical(ints(&[1])), ints(&[1]));

        assert_eq!(reconstruct(&ints(&[2, 1, 0, 2, 4])), reconstruct(&ints(&[2, 3, 4])));
        assert_eq!(reconstruct(&ints(&[0, 1, 5])), Some(ratio(5, 6)));
        assert_eq!(reconstruct(&[]), None);
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", rational(5, 1).prefix(10).unwrap()), "[5]");
        assert_eq!(format!("{}", rational(355, 113).prefix(10).unwrap()), "[3; 7, 16]");
        assert_eq!(format!("{}", e().prefix(3).unwrap()), "[2; 1, 2, ...]");
        assert_eq!(format!("{}", e().prefix(1).unwrap()), "[2; ...]");
    }

    #[test]
    fn polynomial_operand_test() {
        use crate::matter::Polynomial;

        let two_x = Value::from(Polynomial::new(ints(&[0, 2])));
        let cf = ContinuedFraction::rational(two_x, 3).unwrap();
        assert!(matches!(cf.take_terms(10), Err(Error::IncompatibleBackend { .. })));

        let seven = Value::from(Polynomial::new(ints(&[7])));
        assert_eq!(ContinuedFraction::rational(seven, 3).unwrap().take_terms(10), Ok(ints(&[2, 3])));
    }

    #[test]
    fn cont_frac_arithmetic_test() {
        let sum = rational(1, 2) + rational(1, 3);
        assert_eq!(sum.take_terms(10), Ok(ints(&[0, 1, 5])));
        assert_eq!(sum.to_rational(10), Ok(Approximation::Exact(ratio(5, 6))));

        assert_eq!((&rational(1, 2) - &rational(1, 3)).take_terms(10), Ok(ints(&[0, 6])));
        assert_eq!((rational(3, 2) * rational(4, 5)).take_terms(10), Ok(ints(&[1, 5])));
        assert_eq!((rational(-3, 4) / rational(5, 7)).take_terms(10), Ok(ints(&[-2, 1, 19])));
        assert_eq!((rational(1, 3) - 1).take_terms(10), Ok(ints(&[-1, 3])));
        assert_eq!((rational(1, 3) * b(3)).take_terms(10), Ok(ints(&[1])));

        // the result of an operation feeds further engines
        let nested = (rational(1, 2) + rational(1, 3)) * (rational(1, 2) - rational(1, 3));
        assert_eq!(nested.to_rational(20), Ok(Approximation::Exact(ratio(5, 36))));

        let tally = ContinuedFraction::rational(Tally::unsigned(1).unwrap(), 2).unwrap();
        assert_eq!((tally + rational(1, 3)).take_terms(10), Ok(ints(&[0, 1, 5])));

        assert_eq!((rational(3, 1) / 0).take_terms(10), Err(Error::DivisionByZeroStream));
    }

    #[test]
    fn inf_cont_frac_arithmetic_test() {
        assert_eq!((e() + 1).take_terms(5), Ok(ints(&[3, 1, 2, 1, 1])));
        assert_eq!((e() * 2).take_terms(5), Ok(ints(&[5, 2, 3, 2, 3])));
        assert_eq!((e() * e()).take_terms(6), Ok(ints(&[7, 2, 1, 1, 3, 18])));
        assert_eq!((-e()).take_terms(6), Ok(ints(&[-3, 3, 1, 1, 4, 1])));
        assert_eq!((-rational(1, 2)).take_terms(10), Ok(ints(&[-1, 2])));
        assert_eq!(
            e().homo(b(1), b(-2), b(0), b(1)).take_terms(8),
            Ok(ints(&[0, 1, 2, 1, 1, 4, 1, 1]))
        );
        assert_eq!((sqrt2() + 1).take_terms(5), Ok(ints(&[2, 2, 2, 2, 2])));

        let ln2 = ContinuedFraction::ln(ratio(2, 1)).unwrap();
        assert_eq!(ln2.take_terms(6), Ok(ints(&[0, 1, 2, 3, 1, 6])));
        let e_half = ContinuedFraction::exp(ratio(1, 2)).unwrap();
        assert_eq!(e_half.take_terms(5), Ok(ints(&[1, 1, 1, 1, 5])));
        assert!(ContinuedFraction::ln(ratio(0, 1)).is_err());
    }

    #[test]
    fn self_combination_test() {
        let config = EngineConfig::default().with_ingest_ceiling(40);
        let deadlock = Err(Error::DeadlockDetected { cycles: 41, ceiling: 40 });

        let x = sqrt2().with_config(config);
        assert_eq!((x.clone() - x.clone()).take_terms(1), deadlock);
        assert_eq!((x.clone() / x.clone()).take_terms(1), deadlock);
        let y = e().with_config(config);
        assert_eq!((y.clone() / y).take_terms(1), deadlock);

        let r = rational(2, 3).with_config(config);
        assert_eq!((r.clone() / r.clone()).take_terms(5), Ok(ints(&[1])));
        assert_eq!((r.clone() - r).take_terms(5), Ok(ints(&[0])));
    }

    #[test]
    fn config_test() {
        let tight = EngineConfig::default().with_ingest_ceiling(5);
        let deadlock = Err(Error::DeadlockDetected { cycles: 6, ceiling: 5 });

        // the tighter ceiling of the two operands governs the engine
        let y = sqrt2().with_config(tight);
        let shifted = ContinuedFraction::from(0) + y.clone();
        assert_eq!(shifted.config(), &tight);
        assert_eq!((y.clone() * y.clone()).take_terms(1), deadlock);
        assert_eq!((shifted.clone() * y.clone()).take_terms(1), deadlock);
        assert_eq!((sqrt2() * y).take_terms(1), deadlock);

        let loose = ContinuedFraction::transcendental(Transcendental::Pi).unwrap();
        assert_eq!(loose.take_terms(8), Ok(ints(&[3, 7, 15, 1, 292, 1, 1, 1])));

        let tight = EngineConfig::default().with_ingest_ceiling(100);
        let pi = ContinuedFraction::transcendental_with(Transcendental::Pi, tight).unwrap();
        assert_eq!(pi.config(), &tight);
        assert_eq!(
            pi.take_terms(5),
            Err(Error::DeadlockDetected { cycles: 101, ceiling: 100 })
        );
    }

    #[test]
    fn generalize_test() {
        use crate::cont_frac::GeneralContinuedFraction;

        let pairs = rational(355, 113).generalize().map(Result::unwrap).collect::<Vec<_>>();
        assert_eq!(pairs, vec![(b(1), b(3)), (b(1), b(7)), (b(1), b(16))]);
        let simplified = pairs.into_iter().simplify();
        assert_eq!(simplified.collect::<Result<Vec<_>>>(), Ok(ints(&[3, 7, 16])));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn gaussian_fraction_test() {
        use num_complex::Complex;

        let c = |re: i64, im: i64| Complex::new(b(re), b(im));
        let g = GaussianFraction::new(c(5, 2), c(2, 1)).unwrap();
        assert_eq!(g.take_terms(10), Ok(vec![c(2, 0), c(2, 1)]));
        assert_eq!(g.to_ratio(10), Ok(Approximation::Exact((c(5, 2), c(2, 1)))));
        assert_eq!(g.to_ratio(1), Ok(Approximation::Approximated((c(2, 0), c(1, 0)))));

        let g = GaussianFraction::new(c(10, 0), c(3, 1)).unwrap();
        assert_eq!(g.take_terms(10), Ok(vec![c(3, -1)]));
        assert!(matches!(GaussianFraction::new(c(1, 1), c(0, 0)), Err(Error::DivisionByZero)));
    }
}
