//! Observational counters attached to each engine instance.
//!
//! The statistics never influence the computed terms. Callers read them
//! through `stats()` on the engine that owns them.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Counters of a single Gosper engine or matrix pump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Terms pulled from the first operand (or GCF pairs for a pump)
    pub ingested_x: usize,
    /// Terms pulled from the second operand
    pub ingested_y: usize,
    /// Terms emitted so far
    pub emitted: usize,
    /// Drain cycles performed after an operand ran out
    pub drains: usize,
    /// Sum of coefficient magnitudes after the latest step
    pub mass: BigUint,
}

impl Stats {
    /// Natural logarithm of the current mass. Masses too large for `f64`
    /// are estimated from their bit length.
    pub fn entropy(&self) -> f64 {
        if self.mass.is_zero() {
            return 0.0;
        }
        if self.mass.bits() > 1000 {
            return self.mass.bits() as f64 * core::f64::consts::LN_2;
        }
        match self.mass.to_f64() {
            Some(m) => m.ln(),
            None => f64::INFINITY,
        }
    }

    #[inline]
    pub fn ingested(&self) -> usize {
        self.ingested_x + self.ingested_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_test() {
        let mut stats = Stats::default();
        assert_eq!(stats.entropy(), 0.0);

        stats.mass = BigUint::from(4u32);
        assert!((stats.entropy() - 4f64.ln()).abs() < 1e-12);

        stats.mass = BigUint::from(1u32) << 2000usize;
        let expected = 2001.0 * core::f64::consts::LN_2;
        assert!((stats.entropy() - expected).abs() < 1e-9);
    }
}
