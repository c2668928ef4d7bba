use pimbridge_engine::mock::MockEngine;
use pimbridge_engine::{EngineError, StorageStatus, SyncEngine};
use pimbridge_types::{value, CollectionRef, CollectionType, EntryPath, ITEM_ENTRY_KEY};
use std::path::Path;

fn store() -> &'static Path {
    Path::new("/sync/store")
}

fn contacts(name: &str) -> CollectionRef {
    CollectionRef::new(CollectionType::Contacts, name).unwrap()
}

// ── Storage checks ────────────────────────────────────────────────

#[test]
fn storage_is_ok_by_default() {
    let engine = MockEngine::new();
    assert!(engine.check_storage(store()).is_ok());
}

#[test]
fn storage_status_can_be_overridden() {
    let engine = MockEngine::new();
    engine.set_storage_status(StorageStatus::UnsupportedVersion);
    assert_eq!(
        engine.check_storage(store()),
        StorageStatus::UnsupportedVersion
    );

    engine.set_storage_status_for("/elsewhere", StorageStatus::InvalidMarker);
    assert_eq!(
        engine.check_storage(Path::new("/elsewhere")),
        StorageStatus::InvalidMarker
    );
}

#[test]
fn storage_status_codes_round_trip() {
    for code in [0, 1, 2, 17] {
        assert_eq!(StorageStatus::from_code(code).code(), code);
    }
}

// ── App id ────────────────────────────────────────────────────────

#[test]
fn app_id_is_stable_and_namespaced() {
    let engine = MockEngine::new();
    let a = engine.app_id("pimbridge");
    let b = engine.app_id("pimbridge");
    assert_eq!(a, b);
    assert!(a.as_str().starts_with("pimbridge-"));
}

// ── Listing and metadata ──────────────────────────────────────────

#[test]
fn list_collections_filters_by_kind_and_respects_max() {
    let engine = MockEngine::new();
    engine.add_collection(CollectionType::Contacts, "alice");
    engine.add_collection(CollectionType::Contacts, "bob");
    engine.add_collection(CollectionType::Calendars, "work");

    let names = engine
        .list_collections(store(), CollectionType::Contacts, 10)
        .unwrap();
    assert_eq!(names, ["alice", "bob"]);

    let bounded = engine
        .list_collections(store(), CollectionType::Contacts, 1)
        .unwrap();
    assert_eq!(bounded.len(), 1);
}

#[test]
fn static_info_returns_raw_values() {
    let engine = MockEngine::new();
    engine.add_named_collection(CollectionType::Contacts, "alice", "Alice's contacts");

    let raw = engine
        .static_info(store(), &contacts("alice"), &value::encode_str("name"))
        .unwrap();
    assert_eq!(raw.as_deref(), Some("\"Alice's contacts\""));

    let missing = engine
        .static_info(store(), &contacts("alice"), &value::encode_str("color"))
        .unwrap();
    assert_eq!(missing, None);
}

#[test]
fn static_info_unknown_collection_errors() {
    let engine = MockEngine::new();
    assert!(matches!(
        engine.static_info(store(), &contacts("ghost"), "\"name\""),
        Err(EngineError::UnknownCollection(_))
    ));
}

// ── Sessions ──────────────────────────────────────────────────────

#[test]
fn sessions_are_balanced() {
    let engine = MockEngine::new();
    engine.add_collection(CollectionType::Contacts, "alice");
    let app_id = engine.app_id("test");

    assert_eq!(engine.open_sessions(), 0);
    let session = engine
        .open_session(store(), &contacts("alice"), &app_id)
        .unwrap();
    assert_eq!(engine.open_sessions(), 1);
    drop(session);
    assert_eq!(engine.open_sessions(), 0);
}

#[test]
fn open_failure_injection() {
    let engine = MockEngine::new();
    engine.add_collection(CollectionType::Contacts, "alice");
    engine.fail_open(CollectionType::Contacts, "alice", 3);
    let app_id = engine.app_id("test");

    let err = engine
        .open_session(store(), &contacts("alice"), &app_id)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::SessionOpen {
            collection: "contacts/alice".to_string(),
            code: 3,
        }
    );
    assert_eq!(engine.open_sessions(), 0);
}

#[test]
fn set_entry_supersedes_at_the_same_path() {
    let engine = MockEngine::new();
    let app_id = engine.app_id("test");
    let mut session = engine
        .open_session(store(), &contacts("alice"), &app_id)
        .unwrap();

    session
        .set_entry(EntryPath::resource("1"), ITEM_ENTRY_KEY, "\"first\"")
        .unwrap();
    session
        .set_entry(EntryPath::resource("1"), ITEM_ENTRY_KEY, "\"second\"")
        .unwrap();

    let entries = session.stored_entries(&EntryPath::resources_root()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, "\"second\"");
    assert_eq!(
        engine.entry_value(CollectionType::Contacts, "alice", "1"),
        Some("\"second\"".to_string())
    );
}

#[test]
fn stored_entries_filters_by_prefix() {
    let engine = MockEngine::new();
    let app_id = engine.app_id("test");
    let mut session = engine
        .open_session(store(), &contacts("alice"), &app_id)
        .unwrap();

    session
        .set_entry(EntryPath::resource("1"), ITEM_ENTRY_KEY, "\"kept\"")
        .unwrap();
    session
        .set_entry(EntryPath::new(["info", "color"]), ITEM_ENTRY_KEY, "\"red\"")
        .unwrap();

    let entries = session.stored_entries(&EntryPath::resources_root()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item_id(), Some("1"));
}

#[test]
fn seeded_entries_are_replayed() {
    let engine = MockEngine::new();
    engine.seed_entry(CollectionType::Contacts, "alice", "42", "\"hello\"");
    let app_id = engine.app_id("test");

    let session = engine
        .open_session(store(), &contacts("alice"), &app_id)
        .unwrap();
    let entries = session.stored_entries(&EntryPath::resources_root()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, ITEM_ENTRY_KEY);
    assert_eq!(entries[0].value, "\"hello\"");
}
