//! Runtime knobs shared by the bihomographic engine and the matrix pump.

/// Default number of consecutive non-emitting ingest cycles tolerated by an engine
pub const DEFAULT_INGEST_CEILING: usize = 1000;

/// Configuration of a single engine instance.
///
/// A [ContinuedFraction][crate::ContinuedFraction] carries one of these and
/// hands a copy to every engine it spawns through arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of consecutive ingest cycles without an emitted term
    /// before the engine gives up with [Error::DeadlockDetected][crate::Error::DeadlockDetected]
    pub ingest_ceiling: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingest_ceiling(mut self, ceiling: usize) -> Self {
        self.ingest_ceiling = ceiling;
        self
    }

    /// Configuration for an engine fed by two values: the tighter ceiling wins
    pub fn strictest(self, other: EngineConfig) -> Self {
        EngineConfig {
            ingest_ceiling: self.ingest_ceiling.min(other.ingest_ceiling),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            ingest_ceiling: DEFAULT_INGEST_CEILING,
        }
    }
}
