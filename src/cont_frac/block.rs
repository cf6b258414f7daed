use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};

use crate::matter::integer::magnitude;

/// A block on the magic table for homographic operation computation of continued fractions.
/// It represents `(px + q) / (rx + s)` where x is the unread tail of the input.
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    p: BigInt,
    q: BigInt,
    r: BigInt,
    s: BigInt,
}

impl Block {
    /// create a block that represents (px + q) / (rx + s)
    pub fn new(p: BigInt, q: BigInt, r: BigInt, s: BigInt) -> Self {
        Block { p, q, r, s }
    }

    /// create a block that represents a identity operation
    pub fn identity() -> Self {
        Block::new(BigInt::one(), BigInt::zero(), BigInt::zero(), BigInt::one())
    }

    pub fn coeffs(&self) -> [&BigInt; 4] {
        [&self.p, &self.q, &self.r, &self.s]
    }

    /// move with two coefficients from generalized continued fraction,
    /// substituting `x = b + a / x'`
    pub fn gmove(&mut self, a: &BigInt, b: &BigInt) {
        let p = &self.p * b + &self.q;
        let q = &self.p * a;
        let r = &self.r * b + &self.s;
        let s = &self.r * a;
        *self = Block { p, q, r, s };
        self.reduce();
    }

    /// move with a coefficient from regular continued fraction
    #[inline]
    pub fn rmove(&mut self, a: &BigInt) {
        self.gmove(&BigInt::one(), a)
    }

    /// divide all coefficients by their common factor
    pub fn reduce(&mut self) {
        let g = self.p.gcd(&self.q).gcd(&self.r).gcd(&self.s);
        if g > BigInt::one() {
            self.p /= &g;
            self.q /= &g;
            self.r /= &g;
            self.s /= &g;
        }
    }

    /// The input ended, i.e. x = ∞
    pub fn collapse(&mut self) {
        let p = std::mem::take(&mut self.p);
        let r = std::mem::take(&mut self.r);
        *self = Block::new(BigInt::zero(), p, BigInt::zero(), r);
    }

    /// The value no longer depends on the input
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.p.is_zero() && self.r.is_zero()
    }

    /// The value is exactly ∞ (or undefined), nothing more can be emitted
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.r.is_zero() && self.s.is_zero()
    }

    /// Numerator and denominator at the extremes `x = ∞` and `x = lower`
    pub fn corners(&self, lower: &BigInt) -> Vec<(BigInt, BigInt)> {
        if self.is_collapsed() {
            vec![(self.q.clone(), self.s.clone())]
        } else {
            vec![
                (self.p.clone(), self.r.clone()),
                (&self.p * lower + &self.q, &self.r * lower + &self.s),
            ]
        }
    }

    /// Extract the integer term k, leaving `1 / (z - k)`
    pub fn emit(&mut self, k: &BigInt) {
        let p = std::mem::take(&mut self.r);
        let q = std::mem::take(&mut self.s);
        self.r = &self.p - k * &p;
        self.s = &self.q - k * &q;
        self.p = p;
        self.q = q;
    }

    /// The value of the block with the input at infinity, i.e. the latest convergent
    pub fn convergent(&self) -> Option<Ratio<BigInt>> {
        if self.r.is_zero() {
            None
        } else {
            Some(Ratio::new(self.p.clone(), self.r.clone()))
        }
    }

    pub fn mass(&self) -> BigUint {
        self.coeffs().iter().map(|c| magnitude(c)).sum()
    }
}

/// A block on the magic table for bihomographic operation computation of continued fractions.
/// It represents `(axy + bx + cy + d) / (exy + fx + gy + h)`.
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/bihom.html>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualBlock {
    a: BigInt,
    b: BigInt,
    c: BigInt,
    d: BigInt,
    e: BigInt,
    f: BigInt,
    g: BigInt,
    h: BigInt,
}

impl DualBlock {
    /// create a block that represents (axy + bx + cy + d)/(exy + fx + gy + h)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: BigInt,
        b: BigInt,
        c: BigInt,
        d: BigInt,
        e: BigInt,
        f: BigInt,
        g: BigInt,
        h: BigInt,
    ) -> Self {
        DualBlock { a, b, c, d, e, f, g, h }
    }

    pub fn from_i64(coeffs: [i64; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = coeffs;
        DualBlock::new(
            a.into(),
            b.into(),
            c.into(),
            d.into(),
            e.into(),
            f.into(),
            g.into(),
            h.into(),
        )
    }

    pub fn coeffs(&self) -> [&BigInt; 8] {
        [
            &self.a, &self.b, &self.c, &self.d, &self.e, &self.f, &self.g, &self.h,
        ]
    }

    /// move with a coefficient p from the first continued fraction, x = p + 1/x'
    pub fn ingest_x(&mut self, p: &BigInt) {
        let a = &self.a * p + &self.c;
        let b = &self.b * p + &self.d;
        let e = &self.e * p + &self.g;
        let f = &self.f * p + &self.h;
        self.c = std::mem::replace(&mut self.a, a);
        self.d = std::mem::replace(&mut self.b, b);
        self.g = std::mem::replace(&mut self.e, e);
        self.h = std::mem::replace(&mut self.f, f);
    }

    /// move with a coefficient q from the second continued fraction, y = q + 1/y'
    pub fn ingest_y(&mut self, q: &BigInt) {
        let a = &self.a * q + &self.b;
        let c = &self.c * q + &self.d;
        let e = &self.e * q + &self.f;
        let g = &self.g * q + &self.h;
        self.b = std::mem::replace(&mut self.a, a);
        self.d = std::mem::replace(&mut self.c, c);
        self.f = std::mem::replace(&mut self.e, e);
        self.h = std::mem::replace(&mut self.g, g);
    }

    /// The first continued fraction ended, i.e. x = ∞
    pub fn drain_x(&mut self) {
        self.c = std::mem::take(&mut self.a);
        self.d = std::mem::take(&mut self.b);
        self.g = std::mem::take(&mut self.e);
        self.h = std::mem::take(&mut self.f);
    }

    /// The second continued fraction ended, i.e. y = ∞
    pub fn drain_y(&mut self) {
        self.b = std::mem::take(&mut self.a);
        self.d = std::mem::take(&mut self.c);
        self.f = std::mem::take(&mut self.e);
        self.h = std::mem::take(&mut self.g);
    }

    /// Extract the integer term k, leaving `1 / (z - k)`
    pub fn emit(&mut self, k: &BigInt) {
        let a = &self.a - k * &self.e;
        let b = &self.b - k * &self.f;
        let c = &self.c - k * &self.g;
        let d = &self.d - k * &self.h;
        self.a = std::mem::replace(&mut self.e, a);
        self.b = std::mem::replace(&mut self.f, b);
        self.c = std::mem::replace(&mut self.g, c);
        self.d = std::mem::replace(&mut self.h, d);
    }

    /// divide all coefficients by their common factor
    pub fn reduce(&mut self) {
        let g = self
            .coeffs()
            .iter()
            .fold(BigInt::zero(), |acc, c| acc.gcd(c));
        if g > BigInt::one() {
            self.a /= &g;
            self.b /= &g;
            self.c /= &g;
            self.d /= &g;
            self.e /= &g;
            self.f /= &g;
            self.g /= &g;
            self.h /= &g;
        }
    }

    /// The denominator vanished identically, the value is ∞ (or undefined)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.e.is_zero() && self.f.is_zero() && self.g.is_zero() && self.h.is_zero()
    }

    /// Numerators and denominators at the extremes of the unread inputs.
    ///
    /// A live input ranges over `[1, ∞]`, a drained one no longer matters and
    /// only contributes the bound 1. With both inputs live the corners are
    /// ordered (∞,∞), (∞,1), (1,∞), (1,1), x first.
    pub fn corners(&self, x_live: bool, y_live: bool) -> Vec<(BigInt, BigInt)> {
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        let (e, f, g, h) = (&self.e, &self.f, &self.g, &self.h);
        let one_one = (a + b + c + d, e + f + g + h);
        match (x_live, y_live) {
            (true, true) => vec![(a.clone(), e.clone()), (a + b, e + f), (a + c, e + g), one_one],
            (true, false) => vec![(a + b, e + f), one_one],
            (false, true) => vec![(a + c, e + g), one_one],
            (false, false) => vec![one_one],
        }
    }

    pub fn mass(&self) -> BigUint {
        self.coeffs().iter().map(|c| magnitude(c)).sum()
    }
}

/// Floor of n / d. None when d is zero
pub fn floor_div(n: &BigInt, d: &BigInt) -> Option<BigInt> {
    if d.is_zero() {
        None
    } else {
        Some(n.div_floor(d))
    }
}

/// The common integer part of all corners, if the corners agree on it.
///
/// Every denominator must be nonzero with the same sign, otherwise the value
/// may pass through infinity between the corners.
pub fn consensus(corners: &[(BigInt, BigInt)]) -> Option<BigInt> {
    let (_, first) = corners.first()?;
    let positive = first.is_positive();
    let mut floor: Option<BigInt> = None;
    for (n, d) in corners {
        if d.is_zero() || d.is_positive() != positive {
            return None;
        }
        let i = n.div_floor(d);
        match &floor {
            Some(f) if *f != i => return None,
            Some(_) => {}
            None => floor = Some(i),
        }
    }
    floor
}
