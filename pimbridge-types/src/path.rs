//! Remote identifiers: the mapping between PIM collection/item
//! identifiers and synchronization-engine path segments.
//!
//! A single reserved separator joins segments. Splitting takes exactly
//! the first two segments; an item id is the remainder after the second
//! separator, so separators inside item ids survive round-trips verbatim.

use crate::collection::{CollectionType, UnknownCollectionType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator joining remote-identifier segments.
///
/// Must not appear inside a collection type name or a collection name;
/// item ids may contain it.
pub const REMOTE_ID_SEPARATOR: char = '/';

/// Errors from constructing or parsing remote identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteIdError {
    #[error(transparent)]
    UnknownType(#[from] UnknownCollectionType),

    #[error("missing '{REMOTE_ID_SEPARATOR}' separator in remote id: {0}")]
    MissingSeparator(String),

    #[error("empty collection name in remote id")]
    EmptyName,

    #[error("collection name contains the reserved separator: {0}")]
    ReservedSeparator(String),
}

/// Reference to one engine-managed synchronization collection,
/// identified by `(type, name)`.
///
/// The remote identifier `<type>/<name>` is the stable string key the
/// host framework stores; it survives re-enumeration, unlike host-side
/// numeric collection ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionRef {
    kind: CollectionType,
    name: String,
}

impl CollectionRef {
    /// Creates a reference, rejecting empty names and names containing
    /// the reserved separator.
    pub fn new(kind: CollectionType, name: impl Into<String>) -> Result<Self, RemoteIdError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RemoteIdError::EmptyName);
        }
        if name.contains(REMOTE_ID_SEPARATOR) {
            return Err(RemoteIdError::ReservedSeparator(name));
        }
        Ok(Self { kind, name })
    }

    /// The collection's type.
    #[must_use]
    pub const fn kind(&self) -> CollectionType {
        self.kind
    }

    /// The engine-assigned collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stable remote identifier, `<type>/<name>`.
    #[must_use]
    pub fn remote_id(&self) -> String {
        format!("{}{}{}", self.kind.as_str(), REMOTE_ID_SEPARATOR, self.name)
    }

    /// Remote identifier of the synthetic per-type folder, `<type>/`.
    ///
    /// Folder identifiers deliberately fail [`CollectionRef::from_str`]
    /// (empty name): folders group collections and never resolve to an
    /// engine session.
    #[must_use]
    pub fn folder_remote_id(kind: CollectionType) -> String {
        format!("{}{}", kind.as_str(), REMOTE_ID_SEPARATOR)
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.as_str(), REMOTE_ID_SEPARATOR, self.name)
    }
}

impl FromStr for CollectionRef {
    type Err = RemoteIdError;

    /// Parses `<type>/<name>`, taking exactly the first two segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.splitn(3, REMOTE_ID_SEPARATOR);
        let kind = segments.next().unwrap_or("");
        let name = segments
            .next()
            .ok_or_else(|| RemoteIdError::MissingSeparator(s.to_string()))?;
        let kind = CollectionType::from_str(kind)?;
        if name.is_empty() {
            return Err(RemoteIdError::EmptyName);
        }
        Ok(Self {
            kind,
            name: name.to_string(),
        })
    }
}

/// Reference to one item within a synchronization collection.
///
/// The item id is chosen by whichever side created the entry; the bridge
/// never fabricates one. It is carried verbatim, separators included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    collection: CollectionRef,
    item_id: String,
}

impl ItemRef {
    /// Creates an item reference within `collection`.
    #[must_use]
    pub fn new(collection: CollectionRef, item_id: impl Into<String>) -> Self {
        Self {
            collection,
            item_id: item_id.into(),
        }
    }

    /// The containing collection.
    #[must_use]
    pub const fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    /// The item id, scoped to the containing collection.
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// The remote identifier, `<type>/<name>/<item-id>`.
    #[must_use]
    pub fn remote_id(&self) -> String {
        format!(
            "{}{}{}",
            self.collection.remote_id(),
            REMOTE_ID_SEPARATOR,
            self.item_id
        )
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.remote_id())
    }
}

impl FromStr for ItemRef {
    type Err = RemoteIdError;

    /// Parses `<type>/<name>/<item-id>`; the item id is the remainder
    /// after the second separator, not a fixed-width segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.splitn(3, REMOTE_ID_SEPARATOR);
        let kind = segments.next().unwrap_or("");
        let name = segments
            .next()
            .ok_or_else(|| RemoteIdError::MissingSeparator(s.to_string()))?;
        let item_id = segments
            .next()
            .ok_or_else(|| RemoteIdError::MissingSeparator(s.to_string()))?;
        let collection = CollectionRef::new(CollectionType::from_str(kind)?, name)?;
        Ok(Self {
            collection,
            item_id: item_id.to_string(),
        })
    }
}
