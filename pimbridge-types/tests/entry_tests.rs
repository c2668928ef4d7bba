use pimbridge_types::{Entry, EntryPath, ITEM_ENTRY_KEY};

// ── EntryPath ─────────────────────────────────────────────────────

#[test]
fn resource_paths_live_under_the_resources_root() {
    let path = EntryPath::resource("1234");
    assert!(path.starts_with(&EntryPath::resources_root()));
    assert_eq!(path.segments(), ["resources", "1234"]);
    assert_eq!(path.last(), Some("1234"));
}

#[test]
fn prefix_matching_is_per_segment() {
    let path = EntryPath::new(["resourcesx", "1"]);
    assert!(!path.starts_with(&EntryPath::resources_root()));
}

#[test]
fn display_joins_segments() {
    assert_eq!(EntryPath::resource("a").to_string(), "resources/a");
    assert_eq!(EntryPath::resources_root().to_string(), "resources");
}

#[test]
fn empty_path() {
    let path = EntryPath::new(Vec::<String>::new());
    assert!(path.is_empty());
    assert_eq!(path.len(), 0);
    assert_eq!(path.last(), None);
}

// ── Entry ─────────────────────────────────────────────────────────

#[test]
fn item_id_of_resource_entry() {
    let entry = Entry::new(
        EntryPath::resource("1234"),
        "2024-05-01T10:00:00Z",
        ITEM_ENTRY_KEY,
        "\"payload\"",
    );
    assert_eq!(entry.item_id(), Some("1234"));
}

#[test]
fn item_id_rejects_other_shapes() {
    let root_only = Entry::new(EntryPath::resources_root(), "t", ITEM_ENTRY_KEY, "null");
    assert_eq!(root_only.item_id(), None);

    let nested = Entry::new(EntryPath::new(["resources", "a", "b"]), "t", ITEM_ENTRY_KEY, "null");
    assert_eq!(nested.item_id(), None);

    let elsewhere = Entry::new(EntryPath::new(["info", "color"]), "t", ITEM_ENTRY_KEY, "null");
    assert_eq!(elsewhere.item_id(), None);
}
