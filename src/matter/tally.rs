//! Unary backend: integers written as runs of tally marks

use crate::error::{Error, Result};
use crate::traits::Matter;
use core::convert::TryFrom;
use core::fmt;
use core::ops::Neg;
use core::str::FromStr;
use num_bigint::{BigInt, BigUint};

/// Largest number of marks a [Tally] may hold. Arithmetic whose result does
/// not fit is carried out by the integer backend instead.
pub const TALLY_CAPACITY: usize = 1 << 16;

const MARK: char = '|';

/// A signed integer stored in unary: a run of `|` marks plus a sign.
///
/// The run never grows past [TALLY_CAPACITY], so its length always fits in a
/// machine word and the magnitude is read off in constant time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tally {
    marks: String,
    negative: bool, // never set for the empty tally
}

impl Tally {
    #[inline]
    fn from_marks(marks: String, negative: bool) -> Self {
        let negative = negative && !marks.is_empty();
        Tally { marks, negative }
    }

    fn with_count(count: usize, negative: bool) -> Result<Self> {
        if count > TALLY_CAPACITY {
            return Err(Error::InvalidMagnitude(format!(
                "{} marks exceed the tally capacity of {}",
                count, TALLY_CAPACITY
            )));
        }
        Ok(Self::from_marks(MARK.to_string().repeat(count), negative))
    }

    fn count_of(n: u64) -> Result<usize> {
        usize::try_from(n)
            .map_err(|_| Error::InvalidMagnitude(format!("{} marks do not fit in memory", n)))
    }

    /// Create a non-negative tally with `n` marks
    pub fn unsigned(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(Error::InvalidMagnitude(format!(
                "an unsigned tally cannot hold {}",
                n
            )));
        }
        Self::with_count(Self::count_of(n as u64)?, false)
    }

    /// Create the negated counterpart of a tally with `n` marks
    pub fn negated(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(Error::InvalidMagnitude(format!(
                "a tally magnitude must be non-negative, got {}",
                n
            )));
        }
        Self::with_count(Self::count_of(n as u64)?, true)
    }

    /// Create a tally from any signed integer
    pub fn signed(n: i64) -> Result<Self> {
        Self::with_count(Self::count_of(n.unsigned_abs())?, n < 0)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn marks(&self) -> &str {
        &self.marks
    }

    pub fn to_bigint(&self) -> BigInt {
        let n = BigInt::from(self.count());
        if self.negative {
            -n
        } else {
            n
        }
    }

    /// Sum of two tallies, or `None` when the result would exceed the capacity
    pub fn checked_add(&self, rhs: &Tally) -> Option<Tally> {
        if self.negative == rhs.negative {
            if self.count() + rhs.count() > TALLY_CAPACITY {
                return None;
            }
            let mut marks = self.marks.clone();
            marks.push_str(&rhs.marks);
            Some(Self::from_marks(marks, self.negative))
        } else {
            // opposite signs cancel mark by mark
            let (long, short) = if self.count() >= rhs.count() {
                (self, rhs)
            } else {
                (rhs, self)
            };
            let marks = long.marks[short.count()..].to_string();
            Some(Self::from_marks(marks, long.negative))
        }
    }

    /// Product of two tallies, or `None` when the result would exceed the capacity
    pub fn checked_mul(&self, rhs: &Tally) -> Option<Tally> {
        let count = self.count().checked_mul(rhs.count())?;
        if count > TALLY_CAPACITY {
            return None;
        }
        Some(Self::from_marks(
            self.marks.repeat(rhs.count()),
            self.negative != rhs.negative,
        ))
    }

    /// Floor division. The remainder takes the sign of the divisor.
    pub fn div_floor(&self, rhs: &Tally) -> Result<(Tally, Tally)> {
        if rhs.marks.is_empty() {
            return Err(Error::DivisionByZero);
        }
        let (mut q, mut r) = (self.count() / rhs.count(), self.count() % rhs.count());
        let opposite = self.negative != rhs.negative;
        if opposite && r != 0 {
            q += 1;
            r = rhs.count() - r;
        }
        Ok((
            Self::with_count(q, opposite)?,
            Self::with_count(r, rhs.negative)?,
        ))
    }
}

impl Neg for &Tally {
    type Output = Tally;

    fn neg(self) -> Tally {
        Tally::from_marks(self.marks.clone(), !self.negative)
    }
}

impl Neg for Tally {
    type Output = Tally;

    fn neg(self) -> Tally {
        let negative = !self.negative;
        Tally::from_marks(self.marks, negative)
    }
}

impl Matter for Tally {
    #[inline]
    fn magnitude(&self) -> BigUint {
        BigUint::from(self.count())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.marks.is_empty()
    }
}

impl FromStr for Tally {
    type Err = Error;

    /// Parse from the textual form, like `"|||"` for 3 or `"-||"` for -2
    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if let Some(c) = body.chars().find(|&c| c != MARK) {
            return Err(Error::InvalidMagnitude(format!(
                "unexpected character {:?} in tally {:?}",
                c, s
            )));
        }
        Self::with_count(body.len(), negative)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.marks)
    }
}

impl fmt::Debug for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tally({})", self.to_bigint())
    }
}
