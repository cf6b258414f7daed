//! Gosper's bihomographic engine: arithmetic between two lazy continued fractions.
//!
//! The engine keeps `z = (axy + bx + cy + d) / (exy + fx + gy + h)` where x and y
//! are the unread tails of the operands, each known to lie in `[1, ∞]`. A term is
//! emitted once the floor of z agrees on every corner of that box, otherwise one
//! more term is pulled from an operand. An operand that runs out is drained,
//! i.e. its tail is replaced by ∞.

use super::block::{consensus, floor_div, DualBlock};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::stats::Stats;
use crate::stream::Stream;
use num_bigint::BigInt;
use tracing::{debug, trace, warn};

/// Arithmetic operator, selecting the initial coefficients of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn block(self) -> DualBlock {
        match self {
            Op::Add => DualBlock::from_i64([0, 1, 1, 0, 0, 0, 0, 1]),
            Op::Sub => DualBlock::from_i64([0, 1, -1, 0, 0, 0, 0, 1]),
            Op::Mul => DualBlock::from_i64([1, 0, 0, 0, 0, 0, 0, 1]),
            Op::Div => DualBlock::from_i64([0, 1, 0, 0, 0, 0, 1, 0]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    X,
    Y,
}

/// Iterator of [ContinuedFraction::bihomo()][crate::ContinuedFraction::bihomo] and of
/// the arithmetic operators
#[derive(Clone)]
pub struct Gosper {
    block: DualBlock,
    x: Stream<BigInt>,
    y: Stream<BigInt>,
    x_live: bool,
    y_live: bool,
    primed: bool,
    finished: bool,
    alternate: Side,
    stall: usize,
    config: EngineConfig,
    stats: Stats,
}

impl Gosper {
    pub fn new(x: Stream<BigInt>, y: Stream<BigInt>, op: Op, config: EngineConfig) -> Self {
        Gosper::with_block(x, y, op.block(), config)
    }

    /// Engine computing an arbitrary bihomographic function of x and y
    pub fn with_block(
        x: Stream<BigInt>,
        y: Stream<BigInt>,
        block: DualBlock,
        config: EngineConfig,
    ) -> Self {
        Gosper {
            block,
            x,
            y,
            x_live: true,
            y_live: true,
            primed: false,
            finished: false,
            alternate: Side::X,
            stall: 0,
            config,
            stats: Stats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next term of the result.
    ///
    /// Returns `Ok(None)` once at the end of a finite result. Any error, like
    /// the end, is final: later calls fail with [Error::ExhaustedStreamMisuse].
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

    fn advance(&mut self) -> Result<Option<BigInt>> {
        if !self.primed {
            self.primed = true;
            for side in [Side::X, Side::Y].iter() {
                if !self.pull(*side)? {
                    return Err(Error::ExhaustedStreamMisuse);
                }
            }
        }

        loop {
            if self.block.is_terminal() {
                return if self.stats.emitted == 0 {
                    Err(Error::DivisionByZeroStream)
                } else {
                    debug!(emitted = self.stats.emitted, "bihomographic engine finished");
                    Ok(None)
                };
            }

            let corners = self.block.corners(self.x_live, self.y_live);
            if let Some(term) = consensus(&corners) {
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

            let side = self.choose(&corners);
            self.pull(side)?;
        }
    }

    /// Pick the operand whose unknown tail keeps the corners apart
    fn choose(&mut self, corners: &[(BigInt, BigInt)]) -> Side {
        match (self.x_live, self.y_live) {
            (true, false) => return Side::X,
            (false, true) => return Side::Y,
            _ => {}
        }

        let floors: Option<Vec<BigInt>> = corners.iter().map(|(n, d)| floor_div(n, d)).collect();
        if let Some(f) = floors {
            if f.len() == 4 {
                // corners are ordered (∞,∞), (∞,1), (1,∞), (1,1)
                let x_spread = f[0] != f[2] || f[1] != f[3];
                let y_spread = f[0] != f[1] || f[2] != f[3];
                if x_spread != y_spread {
                    return if x_spread { Side::X } else { Side::Y };
                }
            }
        }

        let side = self.alternate;
        self.alternate = match side {
            Side::X => Side::Y,
            Side::Y => Side::X,
        };
        side
    }

    /// Ingest one term from the given operand, or drain it when it ended.
    /// Returns whether a term was ingested.
    fn pull(&mut self, side: Side) -> Result<bool> {
        let (stream, live) = match side {
            Side::X => (&mut self.x, self.x_live),
            Side::Y => (&mut self.y, self.y_live),
        };
        if !live {
            return Ok(false);
        }

        let ingested = match stream.consume()? {
            Some(term) => {
                trace!(side = ?side, term = %term, "ingest");
                match side {
                    Side::X => {
                        self.block.ingest_x(&term);
                        self.stats.ingested_x += 1;
                    }
                    Side::Y => {
                        self.block.ingest_y(&term);
                        self.stats.ingested_y += 1;
                    }
                }
                true
            }
            None => {
                debug!(side = ?side, "operand exhausted, draining");
                match side {
                    Side::X => {
                        self.block.drain_x();
                        self.x_live = false;
                    }
                    Side::Y => {
                        self.block.drain_y();
                        self.y_live = false;
                    }
                }
                self.stats.drains += 1;
                false
            }
        };
        self.stats.mass = self.block.mass();
        Ok(ingested)
    }
}

impl Iterator for Gosper {
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Result<BigInt>> {
        if self.finished {
            return None;
        }
        self.next_term().transpose()
    }
}
