//! Items in the host PIM hierarchy.

use serde::{Deserialize, Serialize};

/// A PIM item: the projection of one live log entry.
///
/// The payload is opaque bytes (an iCalendar or vCard blob); the bridge
/// never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item id chosen by whichever side created the entry, scoped to the
    /// parent collection.
    pub remote_id: String,
    /// MIME type, derived from the parent collection's type.
    pub mime_type: String,
    /// Raw payload bytes.
    pub payload: Vec<u8>,
}

impl Item {
    /// Creates an item.
    #[must_use]
    pub fn new(
        remote_id: impl Into<String>,
        mime_type: impl Into<String>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            remote_id: remote_id.into(),
            mime_type: mime_type.into(),
            payload: payload.into(),
        }
    }

    /// The payload as UTF-8 text, when it is valid UTF-8.
    #[must_use]
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}
