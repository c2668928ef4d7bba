//! Core type definitions for PimBridge.
//!
//! This crate defines the fundamental types shared by the bridge layer:
//! - Collection types and remote identifiers (the path mapper)
//! - Synchronization-log entries and entry paths
//! - The value codec for the engine's JSON-string value convention
//!
//! Everything here is pure data; no I/O. The engine contract lives in
//! `pimbridge-engine`, the host-facing model in `pimbridge-model`.

mod collection;
mod entry;
mod ids;
mod path;
pub mod value;

pub use collection::{CollectionType, UnknownCollectionType};
pub use entry::{Entry, EntryPath, ITEM_ENTRY_KEY};
pub use ids::AppId;
pub use path::{CollectionRef, ItemRef, RemoteIdError, REMOTE_ID_SEPARATOR};
pub use value::{ValueError, ValueResult, TOMBSTONE};
