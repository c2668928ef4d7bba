//! Synchronization-log entries and their paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root segment all item-level entries live under.
const RESOURCES: &str = "resources";

/// Key carried by item-level entries.
///
/// The engine requires a key per entry; the bridge's convention uses the
/// JSON `null` literal and never dispatches on it.
pub const ITEM_ENTRY_KEY: &str = "null";

/// Path of an entry in the synchronization log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    /// Builds a path from segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The prefix all item-level entries live under, `["resources"]`.
    #[must_use]
    pub fn resources_root() -> Self {
        Self::new([RESOURCES])
    }

    /// Path of the item-level entry for `item_id`,
    /// `["resources", <item-id>]`.
    #[must_use]
    pub fn resource(item_id: &str) -> Self {
        Self::new([RESOURCES, item_id])
    }

    /// The path segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this path starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &EntryPath) -> bool {
        self.0.starts_with(prefix.segments())
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// One immutable record in the synchronization log.
///
/// A later entry at the same `(path, key)` supersedes the earlier one by
/// the engine's own ordering; the bridge never reorders or merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Where the entry lives in the log.
    pub path: EntryPath,
    /// RFC 3339 stamp assigned by the engine. Opaque to the bridge.
    pub datetime: String,
    /// Entry key; [`ITEM_ENTRY_KEY`] for item entries.
    pub key: String,
    /// Raw engine value, a bare JSON scalar (see [`crate::value`]).
    pub value: String,
}

impl Entry {
    /// Creates an entry.
    #[must_use]
    pub fn new(
        path: EntryPath,
        datetime: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            path,
            datetime: datetime.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// The item id, when this is an item-level entry
    /// (`resources/<item-id>` exactly); `None` for any other shape.
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        match self.path.segments() {
            [root, id] if root == RESOURCES => Some(id.as_str()),
            _ => None,
        }
    }
}
