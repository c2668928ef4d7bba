//! Error types for the bridge core.

use pimbridge_engine::{EngineError, StorageStatus};
use pimbridge_model::FetchError;
use pimbridge_types::{RemoteIdError, ValueError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur in bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No storage location has been configured.
    #[error("no storage location configured")]
    NotConfigured,

    /// A prospective storage location failed validation.
    #[error("invalid storage location {}: {status}", .location.display())]
    InvalidStorage {
        location: PathBuf,
        status: StorageStatus,
    },

    /// The storage location is already set to this path.
    #[error("storage location unchanged")]
    UnchangedLocation,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    RemoteId(#[from] RemoteIdError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
