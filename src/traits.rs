use num_bigint::BigUint;

/// The capability shared by every numeric backend.
///
/// `magnitude` is the physical weight of the value (its absolute size), never
/// the size of the container that stores it. Two backends holding the same
/// mathematical value report the same magnitude.
pub trait Matter {
    fn magnitude(&self) -> BigUint;

    /// True iff the magnitude is zero. Implementations answer this without
    /// computing the full magnitude.
    fn is_zero(&self) -> bool;
}

#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}
