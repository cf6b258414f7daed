//! Error types for continued fraction arithmetic

use thiserror::Error;

/// Result type alias for `num-cfrac` operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the numeric backends, the term generators and the engines.
///
/// Every variant is terminal for the operation that raised it. Streams that
/// surfaced an error are closed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Negative or malformed magnitude handed to a backend constructor
    #[error("Invalid magnitude: {0}")]
    InvalidMagnitude(String),

    /// Mixed-backend operation with no lossless promotion
    #[error("Incompatible backends for {op}: {lhs} and {rhs}")]
    IncompatibleBackend {
        /// Operation that was attempted
        op: &'static str,
        /// Backend of the left operand
        lhs: &'static str,
        /// Backend of the right operand
        rhs: &'static str,
    },

    /// Denominator of a closed-form source is exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result of an engine resolved to an infinite value before emitting any term
    #[error("Division by zero: the divisor stream resolved to exactly zero")]
    DivisionByZeroStream,

    /// The engine failed to emit a term within the configured ingest ceiling
    #[error("Deadlock detected: no consensus after {cycles} ingest cycles (ceiling {ceiling})")]
    DeadlockDetected {
        /// Consecutive non-emitting ingest cycles
        cycles: usize,
        /// Configured ceiling
        ceiling: usize,
    },

    /// Pulling from a stream after its end was already confirmed
    #[error("Stream already exhausted")]
    ExhaustedStreamMisuse,
}
