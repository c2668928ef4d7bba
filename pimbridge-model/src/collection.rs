//! Collections in the host PIM hierarchy.

use pimbridge_types::{CollectionRef, CollectionType};
use serde::{Deserialize, Serialize};

/// MIME type marking a collection that only holds sub-collections.
pub const DIRECTORY_CONTENT_TYPE: &str = "inode/directory";

/// Access rights the host framework is granted on a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rights {
    /// Contents cannot be renamed, moved, or edited through the host.
    pub read_only: bool,
    /// The host's collection-creation flow may request sub-collections.
    pub can_create_collection: bool,
}

impl Rights {
    /// Read-only, no sub-collection creation.
    #[must_use]
    pub const fn read_only() -> Self {
        Self {
            read_only: true,
            can_create_collection: false,
        }
    }

    /// Read-only contents, but sub-collections may be requested.
    #[must_use]
    pub const fn folder() -> Self {
        Self {
            read_only: true,
            can_create_collection: true,
        }
    }
}

/// A collection in the host PIM hierarchy.
///
/// Both the synthetic per-type folders and the projections of engine
/// collections are recomputed on every enumeration; nothing here is
/// persisted by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Stable string key; survives re-enumeration, unlike the host's
    /// numeric collection ids.
    pub remote_id: String,
    /// Remote id of the parent collection; `None` for children of the
    /// hierarchy root.
    pub parent_remote_id: Option<String>,
    /// Display name.
    pub name: String,
    /// MIME types this collection accepts.
    pub content_types: Vec<String>,
    /// Granted rights.
    pub rights: Rights,
}

impl Collection {
    /// The synthetic read-only folder grouping all collections of `kind`.
    #[must_use]
    pub fn type_folder(kind: CollectionType) -> Self {
        Self {
            remote_id: CollectionRef::folder_remote_id(kind),
            parent_remote_id: None,
            name: kind.folder_name().to_string(),
            content_types: vec![DIRECTORY_CONTENT_TYPE.to_string()],
            rights: Rights::folder(),
        }
    }

    /// Projection of the engine collection `sync_ref` under its type
    /// folder, shown as `display_name`.
    #[must_use]
    pub fn projection(sync_ref: &CollectionRef, display_name: impl Into<String>) -> Self {
        Self {
            remote_id: sync_ref.remote_id(),
            parent_remote_id: Some(CollectionRef::folder_remote_id(sync_ref.kind())),
            name: display_name.into(),
            content_types: sync_ref
                .kind()
                .content_types()
                .iter()
                .map(ToString::to_string)
                .collect(),
            rights: Rights::read_only(),
        }
    }

    /// Whether this is a synthetic per-type folder.
    #[must_use]
    pub fn is_type_folder(&self) -> bool {
        self.parent_remote_id.is_none()
    }
}
