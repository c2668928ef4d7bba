//! Error types for the engine seam.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors reported by the synchronization engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Opening a session for a collection failed with an engine code.
    #[error("failed to open session for {collection}: error {code}")]
    SessionOpen { collection: String, code: i32 },

    /// The collection does not exist at the storage location.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// Storage-level failure reported by the engine.
    #[error("storage error: {0}")]
    Storage(String),
}
