use super::block::{consensus, Block};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::stats::Stats;
use crate::stream::Stream;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace, warn};

/// This trait defines utility functions for generalized continued fraction number
/// `b_1 + a_1 / (b_2 + a_2 / (b_3 + a_3 / .. ))`. They are available for any
/// iterator that returns a pair of numbers. The first value will be regarded
/// as a_k while the second value as b_k.
///
/// The matrix pump bounds the unread tail from below by the `b` of the next
/// pair, so every pair after the first must have `a_k >= 0` and `b_k >= 0`
/// (and the tail must converge) for the emitted terms to be correct. A
/// negative pair only stalls the pump until a non-negative one is peeked.
pub trait GeneralContinuedFraction: Iterator<Item = (BigInt, BigInt)> {
    /// Simplify the generalized continued fraction to a simple one
    fn simplify(self) -> Pump
    where
        Self: Sized + Clone + 'static,
    {
        self.simplify_with(Block::identity(), EngineConfig::default())
    }

    /// Simplify `(p·x + q) / (r·x + s)` where x is this generalized continued fraction
    fn simplify_with(self, block: Block, config: EngineConfig) -> Pump
    where
        Self: Sized + Clone + 'static,
    {
        Pump::new(Stream::new(self.map(Ok)), block, config)
    }
}

impl<I: Iterator<Item = (BigInt, BigInt)>> GeneralContinuedFraction for I {}

/// The matrix pump: converts a stream of generalized continued fraction pairs
/// into simple continued fraction terms.
///
/// A term is emitted when the floor of the block agrees at `x = ∞` and at the
/// lower bound of x, which is the `b` of the next pair (known only when the
/// next pair is non-negative). Sources that end are collapsed with `x = ∞`.
// use the magic table method described in https://crypto.stanford.edu/pbc/notes/contfrac/nonsimple.html
#[derive(Clone)]
pub struct Pump {
    block: Block,
    pairs: Stream<(BigInt, BigInt)>,
    primed: bool,
    drained: bool,
    finished: bool,
    stall: usize,
    config: EngineConfig,
    stats: Stats,
}

impl Pump {
    pub fn new(pairs: Stream<(BigInt, BigInt)>, block: Block, config: EngineConfig) -> Self {
        Pump {
            block,
            pairs,
            primed: false,
            drained: false,
            finished: false,
            stall: 0,
            config,
            stats: Stats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Produce the next simple continued fraction term, `Ok(None)` at the end
    /// of a finite value. Errors are final, as in [Gosper::next_term][super::Gosper::next_term].
    pub fn next_term(&mut self) -> Result<Option<BigInt>> {
        if self.finished {
            return Err(Error::ExhaustedStreamMisuse);
        }
        let result = self.advance();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Lower bound of the unread tail, if it is known. Trusts that the
    /// pairs after the peeked one are non-negative as well.
    fn lower_bound(&mut self) -> Result<Option<BigInt>> {
        if self.drained {
            return Ok(Some(BigInt::zero()));
        }
        Ok(match self.pairs.peek()? {
            Some((a, b)) if !a.is_negative() && !b.is_negative() => Some(b.clone()),
            _ => None,
        })
    }

    fn advance(&mut self) -> Result<Option<BigInt>> {
        loop {
            if self.primed {
                if self.block.is_terminal() {
                    return if self.stats.emitted == 0 {
                        Err(Error::DivisionByZeroStream)
                    } else {
                        debug!(emitted = self.stats.emitted, "matrix pump finished");
                        Ok(None)
                    };
                }

                let agreed = self
                    .lower_bound()?
                    .and_then(|lower| consensus(&self.block.corners(&lower)));
                if let Some(term) = agreed {
                    self.block.emit(&term);
                    self.block.reduce();
                    self.stall = 0;
                    self.stats.emitted += 1;
                    self.stats.mass = self.block.mass();
                    trace!(term = %term, "emit");
                    return Ok(Some(term));
                }

                self.stall += 1;
                if self.stall > self.config.ingest_ceiling {
                    warn!(
                        cycles = self.stall,
                        ceiling = self.config.ingest_ceiling,
                        "no consensus within the ingest ceiling"
                    );
                    return Err(Error::DeadlockDetected {
                        cycles: self.stall,
                        ceiling: self.config.ingest_ceiling,
                    });
                }
            }

            match self.pairs.consume()? {
                Some((a, b)) => {
                    trace!(a = %a, b = %b, "ingest");
                    self.block.gmove(&a, &b);
                    self.stats.ingested_x += 1;
                }
                None => {
                    debug!("generalized fraction ended, collapsing");
                    self.block.collapse();
                    self.drained = true;
                    self.stats.drains += 1;
                }
            }
            self.stats.mass = self.block.mass();
            self.primed = true;
        }
    }
}

impl Iterator for Pump {
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Result<BigInt>> {
        if self.finished {
            return None;
        }
        self.next_term().transpose()
    }
}

// REF: https://crypto.stanford.edu/pbc/notes/contfrac/cheat.html

/// Generalized continued fraction of `ln(1 + p/q)`, for `p/q >= 0`:
/// `x / (1 + 1²x / (2 + 1²x / (3 + 2²x / (4 + 2²x / ..))))`, scaled by q
#[derive(Debug, Clone)]
pub struct LnCoefficients {
    p: BigInt,
    q: BigInt,
    k: u64,
}

impl Iterator for LnCoefficients {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let result = if self.k == 0 {
            (self.p.clone(), BigInt::zero())
        } else {
            let m = BigInt::from((self.k + 1) / 2);
            (&m * &m * &self.p * &self.q, BigInt::from(self.k) * &self.q)
        };
        self.k += 1;
        Some(result)
    }
}

pub fn ln1p(p: BigInt, q: BigInt) -> LnCoefficients {
    LnCoefficients { p, q, k: 0 }
}

/// Generalized continued fraction of `exp(p/q)`:
/// `1 + 2x / (2 - x + x² / (6 + x² / (10 + ..)))`, scaled by q
#[derive(Debug, Clone)]
pub struct ExpCoefficients {
    p: BigInt,
    q: BigInt,
    k: u64,
}

impl Iterator for ExpCoefficients {
    type Item = (BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.k {
            0 => (&self.p * 2, BigInt::one()),
            1 => (&self.p * &self.p, &self.q * 2 - &self.p),
            k => (&self.p * &self.p, BigInt::from(4 * (k - 1) + 2) * &self.q),
        };
        self.k += 1;
        Some(result)
    }
}

pub fn exp(p: BigInt, q: BigInt) -> ExpCoefficients {
    ExpCoefficients { p, q, k: 0 }
}
