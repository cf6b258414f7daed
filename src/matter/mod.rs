//! The numeric substrate: interchangeable backends behind the [Matter] contract.
//!
//! [Value] is the closed set of backends. Binary operations between two
//! backends first promote both operands to the richer one with [Value::coerce],
//! so mixing backends never loses precision:
//!
//! ```text
//! Tally ──> Integer ──> Gaussian
//!              └──────> Polynomial
//! ```
//!
//! Gaussian integers and polynomials have no common backend, operations
//! mixing them fail with [Error::IncompatibleBackend].

pub mod integer;
pub mod poly;
pub mod tally;

#[cfg(feature = "complex")]
pub mod gaussian;

use crate::error::{Error, Result};
use crate::traits::Matter;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

#[cfg(feature = "complex")]
use gaussian::Gaussian;
#[cfg(feature = "complex")]
use num_complex::Complex;

pub use poly::Polynomial;
pub use tally::{Tally, TALLY_CAPACITY};

/// Tag of a numeric backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Tally,
    Integer,
    #[cfg(feature = "complex")]
    Gaussian,
    Polynomial,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Tally => "tally",
            Backend::Integer => "integer",
            #[cfg(feature = "complex")]
            Backend::Gaussian => "gaussian",
            Backend::Polynomial => "polynomial",
        }
    }

    /// The least backend both `self` and `other` promote to, if any
    pub fn join(self, other: Backend) -> Option<Backend> {
        use Backend::*;
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Tally, Integer) | (Integer, Tally) => Some(Integer),
            #[cfg(feature = "complex")]
            (Tally, Gaussian) | (Integer, Gaussian) | (Gaussian, Tally) | (Gaussian, Integer) => {
                Some(Gaussian)
            }
            (Tally, Polynomial)
            | (Integer, Polynomial)
            | (Polynomial, Tally)
            | (Polynomial, Integer) => Some(Polynomial),
            _ => None,
        }
    }
}

/// A value held by one of the numeric backends. Values are immutable,
/// every operation returns a new value.
#[derive(Clone)]
pub enum Value {
    Tally(Tally),
    Integer(BigInt),
    #[cfg(feature = "complex")]
    Gaussian(Gaussian),
    Polynomial(Polynomial),
}

impl Value {
    pub fn backend(&self) -> Backend {
        match self {
            Value::Tally(_) => Backend::Tally,
            Value::Integer(_) => Backend::Integer,
            #[cfg(feature = "complex")]
            Value::Gaussian(_) => Backend::Gaussian,
            Value::Polynomial(_) => Backend::Polynomial,
        }
    }

    fn incompatible(&self, other: Backend, op: &'static str) -> Error {
        Error::IncompatibleBackend {
            op,
            lhs: self.backend().name(),
            rhs: other.name(),
        }
    }

    /// Promote the value to the target backend. Only promotions that keep the
    /// value exact are allowed.
    pub fn promote(&self, to: Backend) -> Result<Value> {
        if self.backend() == to {
            return Ok(self.clone());
        }
        let n = match self {
            Value::Tally(t) => t.to_bigint(),
            Value::Integer(n) => n.clone(),
            _ => return Err(self.incompatible(to, "promote")),
        };
        match to {
            Backend::Integer => Ok(Value::Integer(n)),
            #[cfg(feature = "complex")]
            Backend::Gaussian => Ok(Value::Gaussian(Complex::new(n, BigInt::zero()))),
            Backend::Polynomial => Ok(Value::Polynomial(Polynomial::constant(n))),
            Backend::Tally => Err(self.incompatible(to, "promote")),
        }
    }

    /// Bring two values onto their common backend
    pub fn coerce(lhs: &Value, rhs: &Value, op: &'static str) -> Result<(Value, Value)> {
        let target = lhs
            .backend()
            .join(rhs.backend())
            .ok_or_else(|| lhs.incompatible(rhs.backend(), op))?;
        Ok((lhs.promote(target)?, rhs.promote(target)?))
    }

    pub fn add(&self, rhs: &Value) -> Result<Value> {
        match Value::coerce(self, rhs, "add")? {
            (Value::Tally(a), Value::Tally(b)) => Ok(match a.checked_add(&b) {
                Some(t) => Value::Tally(t),
                None => Value::Integer(a.to_bigint() + b.to_bigint()),
            }),
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
            #[cfg(feature = "complex")]
            (Value::Gaussian(a), Value::Gaussian(b)) => Ok(Value::Gaussian(a + b)),
            (Value::Polynomial(a), Value::Polynomial(b)) => Ok(Value::Polynomial(a.add(&b))),
            (a, b) => Err(a.incompatible(b.backend(), "add")),
        }
    }

    pub fn neg(&self) -> Value {
        match self {
            Value::Tally(t) => Value::Tally(-t),
            Value::Integer(n) => Value::Integer(-n),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => Value::Gaussian(-z),
            Value::Polynomial(p) => Value::Polynomial(p.neg()),
        }
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value> {
        self.add(&rhs.neg())
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value> {
        match Value::coerce(self, rhs, "mul")? {
            (Value::Tally(a), Value::Tally(b)) => Ok(match a.checked_mul(&b) {
                Some(t) => Value::Tally(t),
                None => Value::Integer(a.to_bigint() * b.to_bigint()),
            }),
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
            #[cfg(feature = "complex")]
            (Value::Gaussian(a), Value::Gaussian(b)) => Ok(Value::Gaussian(a * b)),
            (Value::Polynomial(a), Value::Polynomial(b)) => Ok(Value::Polynomial(a.mul(&b))),
            (a, b) => Err(a.incompatible(b.backend(), "mul")),
        }
    }

    /// Floor division with remainder, as used by the simple continued fraction
    /// recurrence. Gaussian values are accepted only when both are real;
    /// polynomials use integer long division.
    pub fn div_floor(&self, rhs: &Value) -> Result<(Value, Value)> {
        match Value::coerce(self, rhs, "div_floor")? {
            (Value::Tally(a), Value::Tally(b)) => {
                let (q, r) = a.div_floor(&b)?;
                Ok((Value::Tally(q), Value::Tally(r)))
            }
            (Value::Integer(a), Value::Integer(b)) => {
                let (q, r) = integer::div_floor(&a, &b)?;
                Ok((Value::Integer(q), Value::Integer(r)))
            }
            #[cfg(feature = "complex")]
            (Value::Gaussian(a), Value::Gaussian(b)) => {
                if !a.im.is_zero() || !b.im.is_zero() {
                    return Err(Error::IncompatibleBackend {
                        op: "div_floor",
                        lhs: "gaussian",
                        rhs: "gaussian",
                    });
                }
                let (q, r) = integer::div_floor(&a.re, &b.re)?;
                Ok((
                    Value::Gaussian(Complex::new(q, BigInt::zero())),
                    Value::Gaussian(Complex::new(r, BigInt::zero())),
                ))
            }
            (Value::Polynomial(a), Value::Polynomial(b)) => {
                let (q, r) = a.div_rem(&b)?;
                Ok((Value::Polynomial(q), Value::Polynomial(r)))
            }
            (a, b) => Err(a.incompatible(b.backend(), "div_floor")),
        }
    }

    /// Division rounding to the nearest lattice point (Hurwitz division).
    /// Real backends round to the nearest integer.
    pub fn div_nearest(&self, rhs: &Value) -> Result<(Value, Value)> {
        match Value::coerce(self, rhs, "div_nearest")? {
            #[cfg(feature = "complex")]
            (Value::Gaussian(a), Value::Gaussian(b)) => {
                let (q, r) = gaussian::div_nearest(&a, &b)?;
                Ok((Value::Gaussian(q), Value::Gaussian(r)))
            }
            (a @ Value::Polynomial(_), b) => Err(a.incompatible(b.backend(), "div_nearest")),
            (a, b) => {
                let (n, d) = (a.to_integer()?, b.to_integer()?);
                let q = integer::div_nearest(&n, &d)?;
                let r = &n - &q * &d;
                Ok((Value::Integer(q), Value::Integer(r)))
            }
        }
    }

    /// Extract the value as a plain integer. Fails for Gaussian values with
    /// an imaginary part and for non-constant polynomials.
    pub fn to_integer(&self) -> Result<BigInt> {
        match self {
            Value::Tally(t) => Ok(t.to_bigint()),
            Value::Integer(n) => Ok(n.clone()),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) if z.im.is_zero() => Ok(z.re.clone()),
            Value::Polynomial(p) if p.as_constant().is_some() => {
                Ok(p.coeffs()[0].clone())
            }
            _ => Err(self.incompatible(Backend::Integer, "to_integer")),
        }
    }

    #[cfg(feature = "complex")]
    pub fn to_gaussian(&self) -> Result<Gaussian> {
        match self.promote(Backend::Gaussian)? {
            Value::Gaussian(z) => Ok(z),
            other => Err(other.incompatible(Backend::Gaussian, "to_gaussian")),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Value::Tally(t) => t.is_negative(),
            Value::Integer(n) => n.is_negative(),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => z.im.is_zero() && z.re.is_negative(),
            Value::Polynomial(p) => p.as_constant().map_or(false, |c| c.is_negative()),
        }
    }
}

impl Matter for Value {
    fn magnitude(&self) -> BigUint {
        match self {
            Value::Tally(t) => t.magnitude(),
            Value::Integer(n) => integer::magnitude(n),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => gaussian::magnitude(z),
            Value::Polynomial(p) => p.magnitude(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Value::Tally(t) => Matter::is_zero(t),
            Value::Integer(n) => Zero::is_zero(n),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => Zero::is_zero(z),
            Value::Polynomial(p) => Matter::is_zero(p),
        }
    }
}

impl PartialEq for Value {
    /// Values are equal when they are equal on their common backend
    fn eq(&self, other: &Value) -> bool {
        match Value::coerce(self, other, "eq") {
            Ok((Value::Tally(a), Value::Tally(b))) => a == b,
            Ok((Value::Integer(a), Value::Integer(b))) => a == b,
            #[cfg(feature = "complex")]
            Ok((Value::Gaussian(a), Value::Gaussian(b))) => a == b,
            Ok((Value::Polynomial(a), Value::Polynomial(b))) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Tally(t) => write!(f, "{:?}", t),
            Value::Integer(n) => write!(f, "Integer({})", n),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => write!(f, "Gaussian({}, {})", z.re, z.im),
            Value::Polynomial(p) => write!(f, "Polynomial({})", p),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Tally(t) => write!(f, "{}", t.to_bigint()),
            Value::Integer(n) => write!(f, "{}", n),
            #[cfg(feature = "complex")]
            Value::Gaussian(z) => write!(f, "{}", z),
            Value::Polynomial(p) => write!(f, "{}", p),
        }
    }
}

macro_rules! impl_value_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::Integer(BigInt::from(n))
                }
            }
        )*
    };
}
impl_value_from_primitive!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<Tally> for Value {
    fn from(t: Tally) -> Self {
        Value::Tally(t)
    }
}

impl From<Polynomial> for Value {
    fn from(p: Polynomial) -> Self {
        Value::Polynomial(p)
    }
}

#[cfg(feature = "complex")]
impl From<Gaussian> for Value {
    fn from(z: Gaussian) -> Self {
        Value::Gaussian(z)
    }
}
