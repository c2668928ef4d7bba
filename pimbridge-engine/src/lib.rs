//! Synchronization-engine contract for PimBridge.
//!
//! The engine is an external collaborator: it owns the on-disk log, its
//! merge and ordering semantics, and entry timestamps. The bridge only
//! consumes it through the traits here:
//!
//! - [`SyncEngine`] — storage validation, app-id derivation, collection
//!   listing, static metadata, session opening
//! - [`Session`] — per-collection stored-entry replay and entry writes
//!
//! [`mock::MockEngine`] provides an in-memory implementation for tests.

mod engine;
mod error;
pub mod mock;

pub use engine::{Session, StorageStatus, SyncEngine};
pub use error::{EngineError, EngineResult};
