//! The fixed set of synchronized collection types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of synchronized data.
///
/// The set is fixed at build time. The type determines the engine-side
/// name, the MIME types items of its collections may carry, and the
/// display name of the synthetic per-type folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    Calendars,
    Contacts,
}

impl CollectionType {
    /// All collection types, in enumeration order.
    pub const ALL: [CollectionType; 2] = [CollectionType::Calendars, CollectionType::Contacts];

    /// The engine-side name, also the first remote-identifier segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calendars => "calendars",
            Self::Contacts => "contacts",
        }
    }

    /// MIME types a collection of this type accepts.
    #[must_use]
    pub const fn content_types(&self) -> &'static [&'static str] {
        match self {
            Self::Calendars => &["text/calendar"],
            Self::Contacts => &["text/directory"],
        }
    }

    /// The MIME type items of this collection type are tagged with.
    #[must_use]
    pub const fn item_content_type(&self) -> &'static str {
        match self {
            Self::Calendars => "text/calendar",
            Self::Contacts => "text/directory",
        }
    }

    /// Display name of the synthetic per-type folder.
    #[must_use]
    pub const fn folder_name(&self) -> &'static str {
        match self {
            Self::Calendars => "Synced calendars",
            Self::Contacts => "Synced contacts",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a collection-type name is not in the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection type: {0}")]
pub struct UnknownCollectionType(pub String);

impl FromStr for CollectionType {
    type Err = UnknownCollectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendars" => Ok(Self::Calendars),
            "contacts" => Ok(Self::Contacts),
            other => Err(UnknownCollectionType(other.to_string())),
        }
    }
}
