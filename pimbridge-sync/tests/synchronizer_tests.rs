use pimbridge_engine::mock::MockEngine;
use pimbridge_engine::{EngineError, SyncEngine};
use pimbridge_sync::{synchronize_collection, BridgeConfig, BridgeError};
use pimbridge_types::{value, AppId, CollectionRef, CollectionType, EntryPath, ITEM_ENTRY_KEY};
use std::path::Path;
use std::str::FromStr;

fn configured() -> BridgeConfig {
    BridgeConfig::at("/sync/store")
}

fn app_id(engine: &MockEngine) -> AppId {
    engine.app_id("test")
}

// ── Replay ────────────────────────────────────────────────────────

#[test]
fn replay_materializes_live_items_only() {
    let engine = MockEngine::new();
    engine.seed_entry(
        CollectionType::Contacts,
        "alice",
        "1",
        &value::encode_str("hello"),
    );
    engine.seed_entry(CollectionType::Contacts, "alice", "2", value::TOMBSTONE);

    let items =
        synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/alice").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].remote_id, "1");
    assert_eq!(items[0].mime_type, "text/directory");
    assert_eq!(items[0].payload, b"hello");
}

#[test]
fn empty_payload_is_a_live_item() {
    let engine = MockEngine::new();
    engine.seed_entry(CollectionType::Contacts, "alice", "1", "\"\"");

    let items =
        synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/alice").unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].payload.is_empty());
}

#[test]
fn malformed_value_skips_only_that_entry() {
    let engine = MockEngine::new();
    engine.seed_entry(
        CollectionType::Contacts,
        "alice",
        "1",
        &value::encode_str("kept"),
    );
    engine.seed_entry(CollectionType::Contacts, "alice", "2", "definitely not json");

    let items =
        synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/alice").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].remote_id, "1");
}

#[test]
fn entries_outside_the_resources_prefix_are_ignored() {
    let engine = MockEngine::new();
    let sync_ref = CollectionRef::from_str("contacts/alice").unwrap();
    let id = app_id(&engine);
    {
        let mut session = engine
            .open_session(Path::new("/sync/store"), &sync_ref, &id)
            .unwrap();
        session
            .set_entry(
                EntryPath::new(["info", "color"]),
                ITEM_ENTRY_KEY,
                "\"#ff0000\"",
            )
            .unwrap();
        session
            .set_entry(
                EntryPath::new(["resources", "1", "nested"]),
                ITEM_ENTRY_KEY,
                "\"deep\"",
            )
            .unwrap();
    }

    let items = synchronize_collection(&engine, &configured(), &id, "contacts/alice").unwrap();
    assert!(items.is_empty());
}

#[test]
fn calendar_items_get_the_calendar_mime_type() {
    let engine = MockEngine::new();
    engine.seed_entry(
        CollectionType::Calendars,
        "work",
        "ev1",
        &value::encode_str("BEGIN:VEVENT"),
    );

    let items =
        synchronize_collection(&engine, &configured(), &app_id(&engine), "calendars/work").unwrap();
    assert_eq!(items[0].mime_type, "text/calendar");
}

#[test]
fn synchronization_leaves_no_sessions_open() {
    let engine = MockEngine::new();
    engine.seed_entry(CollectionType::Contacts, "alice", "1", "\"x\"");

    let _ = synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/alice");
    assert_eq!(engine.open_sessions(), 0);
}

// ── Failures ──────────────────────────────────────────────────────

#[test]
fn unset_storage_location_is_not_configured() {
    let engine = MockEngine::new();
    let err = synchronize_collection(
        &engine,
        &BridgeConfig::default(),
        &app_id(&engine),
        "contacts/alice",
    )
    .unwrap_err();
    assert!(matches!(err, BridgeError::NotConfigured));
}

#[test]
fn folder_remote_id_is_rejected() {
    let engine = MockEngine::new();
    let err = synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/")
        .unwrap_err();
    assert!(matches!(err, BridgeError::RemoteId(_)));
}

#[test]
fn session_open_failure_is_a_hard_error() {
    let engine = MockEngine::new();
    engine.add_collection(CollectionType::Contacts, "alice");
    engine.fail_open(CollectionType::Contacts, "alice", 9);

    let err = synchronize_collection(&engine, &configured(), &app_id(&engine), "contacts/alice")
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Engine(EngineError::SessionOpen { code: 9, .. })
    ));
}
