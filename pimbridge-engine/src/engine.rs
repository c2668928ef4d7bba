//! The consumed engine interface.

use crate::error::EngineResult;
use pimbridge_types::{AppId, CollectionRef, CollectionType, Entry, EntryPath};
use std::fmt;
use std::path::Path;

/// Result of validating a storage location.
///
/// Mirrors the engine's status codes: 0 = ok, 1 = invalid marker file,
/// 2 = unsupported version, anything else = unknown error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStatus {
    /// The location holds a usable synchronization store.
    Ok,
    /// A marker file is present but invalid.
    InvalidMarker,
    /// The store was written by an unsupported engine version.
    UnsupportedVersion,
    /// Any other engine-reported code.
    Unknown(i32),
}

impl StorageStatus {
    /// Whether the location is usable.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The engine status code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::InvalidMarker => 1,
            Self::UnsupportedVersion => 2,
            Self::Unknown(code) => *code,
        }
    }

    /// Maps an engine status code back to a status.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::InvalidMarker,
            2 => Self::UnsupportedVersion,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for StorageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("storage location is valid"),
            Self::InvalidMarker => f.write_str("found invalid storage marker file"),
            Self::UnsupportedVersion => f.write_str("unsupported storage format version"),
            Self::Unknown(code) => write!(f, "unknown storage error (code {code})"),
        }
    }
}

/// The synchronization engine, consumed by the bridge.
///
/// Implementations must be callable from the host's event loop; the
/// bridge never holds a session across calls.
pub trait SyncEngine: Send + Sync {
    /// Validates a prospective storage location.
    fn check_storage(&self, location: &Path) -> StorageStatus;

    /// Derives the stable per-install identifier used to tag
    /// locally-originated entries.
    fn app_id(&self, namespace: &str) -> AppId;

    /// Lists up to `max` collection names of `kind` at `location`.
    fn list_collections(
        &self,
        location: &Path,
        kind: CollectionType,
        max: usize,
    ) -> EngineResult<Vec<String>>;

    /// Reads one static-metadata value of a collection.
    ///
    /// Both `key` and the returned value are raw JSON-encoded scalars;
    /// `Ok(None)` means the key is not set.
    fn static_info(
        &self,
        location: &Path,
        collection: &CollectionRef,
        key: &str,
    ) -> EngineResult<Option<String>>;

    /// Opens a session scoped to one collection.
    ///
    /// The session is exclusively owned by the call that opened it;
    /// dropping it closes the session.
    fn open_session(
        &self,
        location: &Path,
        collection: &CollectionRef,
        app_id: &AppId,
    ) -> EngineResult<Box<dyn Session>>;
}

/// An open engine session for one collection.
pub trait Session: std::fmt::Debug {
    /// Every stored entry under `prefix`, after the engine has collapsed
    /// superseded writes.
    ///
    /// Entries are yielded sequentially in engine order; the bridge
    /// assumes nothing beyond last-write-wins having already been
    /// applied.
    fn stored_entries(&self, prefix: &EntryPath) -> EngineResult<Vec<Entry>>;

    /// Appends one timestamped entry, superseding any earlier entry at
    /// the same path and key. Atomic at the engine layer.
    fn set_entry(&mut self, path: EntryPath, key: &str, value: &str) -> EngineResult<()>;
}
