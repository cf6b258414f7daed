//! Exact, lazy arithmetic on continued fractions.
//!
//! Values are streams of continued fraction coefficients. Arithmetic between
//! two values spawns a Gosper bihomographic engine that pulls coefficients
//! from both operands only as far as needed to decide the next coefficient of
//! the result. Transcendental constants are produced by pumping their
//! generalized continued fraction expansions.
//!
//! ```
//! use num_cfrac::ContinuedFraction;
//!
//! let x = ContinuedFraction::rational(1, 2).unwrap() + ContinuedFraction::rational(1, 3).unwrap();
//! assert_eq!(format!("{}", x.prefix(10).unwrap()), "[0; 1, 5]");
//! ```

pub mod config;
pub mod cont_frac;
pub mod error;
pub mod matter;
pub mod stats;
pub mod stream;
pub mod symbols;
pub mod traits;

pub use config::EngineConfig;
pub use cont_frac::{ContinuedFraction, GeneralContinuedFraction, Gosper, Op, Pump};
#[cfg(feature = "complex")]
pub use cont_frac::GaussianFraction;
pub use error::{Error, Result};
pub use matter::{Backend, Value};
pub use stats::Stats;
pub use stream::Stream;
pub use symbols::Transcendental;
pub use traits::{Approximation, Matter};
