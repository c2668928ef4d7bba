//! In-memory engine for tests.
//!
//! Stores post-merge state only: [`Session::set_entry`] overwrites the
//! entry at the same path and key, which is exactly the view the real
//! engine presents to listeners after collapsing superseded writes.

use crate::{EngineError, EngineResult, Session, StorageStatus, SyncEngine};
use chrono::Utc;
use pimbridge_types::{value, AppId, CollectionRef, CollectionType, Entry, EntryPath};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type CollectionKey = (CollectionType, String);

#[derive(Default)]
struct MockCollection {
    /// JSON-encoded key → raw JSON-encoded value.
    info: HashMap<String, String>,
    /// Post-merge entries, keyed by `(path, key)`.
    entries: BTreeMap<(EntryPath, String), Entry>,
}

struct MockState {
    app_suffix: String,
    default_storage: StorageStatus,
    storage_overrides: HashMap<PathBuf, StorageStatus>,
    collections: BTreeMap<CollectionKey, MockCollection>,
    fail_open: HashMap<CollectionKey, i32>,
    open_sessions: usize,
}

/// An in-memory synchronization engine.
///
/// Clones share state, so a test can keep a handle while the bridge owns
/// another.
#[derive(Clone)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

impl MockEngine {
    /// Creates an engine that accepts every storage location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                app_suffix: Uuid::new_v4().simple().to_string(),
                default_storage: StorageStatus::Ok,
                storage_overrides: HashMap::new(),
                collections: BTreeMap::new(),
                fail_open: HashMap::new(),
                open_sessions: 0,
            })),
        }
    }

    /// Registers an empty collection.
    pub fn add_collection(&self, kind: CollectionType, name: &str) {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry((kind, name.to_string()))
            .or_default();
    }

    /// Registers a collection whose static info carries `display_name`.
    pub fn add_named_collection(&self, kind: CollectionType, name: &str, display_name: &str) {
        self.add_collection(kind, name);
        self.set_static_info_raw(
            kind,
            name,
            &value::encode_str("name"),
            &value::encode_str(display_name),
        );
    }

    /// Sets a raw static-info value, malformed values included.
    pub fn set_static_info_raw(&self, kind: CollectionType, name: &str, key: &str, raw: &str) {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry((kind, name.to_string()))
            .or_default()
            .info
            .insert(key.to_string(), raw.to_string());
    }

    /// Seeds a stored item entry, as a remote writer would have.
    pub fn seed_entry(&self, kind: CollectionType, name: &str, item_id: &str, raw_value: &str) {
        let path = EntryPath::resource(item_id);
        let entry = Entry::new(
            path.clone(),
            Utc::now().to_rfc3339(),
            pimbridge_types::ITEM_ENTRY_KEY,
            raw_value,
        );
        self.state
            .lock()
            .unwrap()
            .collections
            .entry((kind, name.to_string()))
            .or_default()
            .entries
            .insert((path, pimbridge_types::ITEM_ENTRY_KEY.to_string()), entry);
    }

    /// Makes `open_session` fail with `code` for one collection.
    pub fn fail_open(&self, kind: CollectionType, name: &str, code: i32) {
        self.state
            .lock()
            .unwrap()
            .fail_open
            .insert((kind, name.to_string()), code);
    }

    /// Overrides the storage check result for every location.
    pub fn set_storage_status(&self, status: StorageStatus) {
        self.state.lock().unwrap().default_storage = status;
    }

    /// Overrides the storage check result for one location.
    pub fn set_storage_status_for(&self, location: impl Into<PathBuf>, status: StorageStatus) {
        self.state
            .lock()
            .unwrap()
            .storage_overrides
            .insert(location.into(), status);
    }

    /// Number of sessions currently open; zero once every session
    /// has been dropped.
    #[must_use]
    pub fn open_sessions(&self) -> usize {
        self.state.lock().unwrap().open_sessions
    }

    /// The raw value currently stored for an item, if any.
    #[must_use]
    pub fn entry_value(&self, kind: CollectionType, name: &str, item_id: &str) -> Option<String> {
        let key = (
            EntryPath::resource(item_id),
            pimbridge_types::ITEM_ENTRY_KEY.to_string(),
        );
        self.state
            .lock()
            .unwrap()
            .collections
            .get(&(kind, name.to_string()))
            .and_then(|coll| coll.entries.get(&key))
            .map(|entry| entry.value.clone())
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine for MockEngine {
    fn check_storage(&self, location: &Path) -> StorageStatus {
        let state = self.state.lock().unwrap();
        state
            .storage_overrides
            .get(location)
            .copied()
            .unwrap_or(state.default_storage)
    }

    fn app_id(&self, namespace: &str) -> AppId {
        AppId::new(format!("{namespace}-{}", self.state.lock().unwrap().app_suffix))
    }

    fn list_collections(
        &self,
        _location: &Path,
        kind: CollectionType,
        max: usize,
    ) -> EngineResult<Vec<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .collections
            .keys()
            .filter(|(k, _)| *k == kind)
            .take(max)
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn static_info(
        &self,
        _location: &Path,
        collection: &CollectionRef,
        key: &str,
    ) -> EngineResult<Option<String>> {
        let state = self.state.lock().unwrap();
        let coll = state
            .collections
            .get(&(collection.kind(), collection.name().to_string()))
            .ok_or_else(|| EngineError::UnknownCollection(collection.remote_id()))?;
        Ok(coll.info.get(key).cloned())
    }

    fn open_session(
        &self,
        _location: &Path,
        collection: &CollectionRef,
        _app_id: &AppId,
    ) -> EngineResult<Box<dyn Session>> {
        let key = (collection.kind(), collection.name().to_string());
        let mut state = self.state.lock().unwrap();
        if let Some(code) = state.fail_open.get(&key) {
            return Err(EngineError::SessionOpen {
                collection: collection.remote_id(),
                code: *code,
            });
        }
        // The engine creates collection stores lazily on first open.
        state.collections.entry(key.clone()).or_default();
        state.open_sessions += 1;
        Ok(Box::new(MockSession {
            state: Arc::clone(&self.state),
            collection: key,
        }))
    }
}

struct MockSession {
    state: Arc<Mutex<MockState>>,
    collection: CollectionKey,
}

impl std::fmt::Debug for MockSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSession")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl Session for MockSession {
    fn stored_entries(&self, prefix: &EntryPath) -> EngineResult<Vec<Entry>> {
        let state = self.state.lock().unwrap();
        let coll = state
            .collections
            .get(&self.collection)
            .ok_or_else(|| EngineError::UnknownCollection(format!("{:?}", self.collection)))?;
        Ok(coll
            .entries
            .values()
            .filter(|entry| entry.path.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn set_entry(&mut self, path: EntryPath, key: &str, value: &str) -> EngineResult<()> {
        let entry = Entry::new(path.clone(), Utc::now().to_rfc3339(), key, value);
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(self.collection.clone())
            .or_default()
            .entries
            .insert((path, key.to_string()), entry);
        Ok(())
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.state.lock().unwrap().open_sessions -= 1;
    }
}
