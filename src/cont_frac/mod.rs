//! Data structures and algorithms implementations related to
//! regular and generalized continued fraction
//!
//! There are three abstractions of the continued fraction
//! 1. [ContinuedFraction][ContinuedFraction] represents a lazily evaluated simple continued fraction
//! 2. [Gosper] and [Pump] are the engines producing the coefficients of arithmetic results
//!    and of generalized continued fractions
//! 3. [GeneralContinuedFraction][GeneralContinuedFraction] is a trait that provides method to operate on a general continued fraction.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <https://perl.plover.com/yak/cftalk/INFO/gosper.txt>
//! - <https://github.com/blynn/frac>

mod bihomo;
mod block;
mod euclid;
mod general;
mod simple;

pub use bihomo::{Gosper, Op};
pub use block::{consensus, Block, DualBlock};
pub use euclid::{Euclid, Rounding};
pub use general::*;
pub use simple::*;
