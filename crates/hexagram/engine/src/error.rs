//! Error types for the relationship engine.

use hexagram_types::{HexagramId, LineError};
use thiserror::Error;

/// Errors raised by the relationship engine.
///
/// Lookup misses are not errors; they surface as `None` or empty collections.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A registry entry had malformed lines. Aborts the whole derivation.
    #[error("invalid registry entry {id}: {source}")]
    InvalidEntry {
        id: HexagramId,
        #[source]
        source: LineError,
    },

    /// Two registry entries share an id.
    #[error("duplicate hexagram id: {0}")]
    DuplicateId(HexagramId),

    /// An operation named an id that is not in the codex.
    #[error("unknown hexagram: {0}")]
    UnknownHexagram(HexagramId),

    /// Canonical serialization for fingerprinting failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
