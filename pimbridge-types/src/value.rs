//! Value codec for the engine's string-value convention.
//!
//! The engine stores raw text per entry. The bridge's convention wraps
//! every payload as a single JSON string scalar so arbitrary text —
//! embedded quotes, newlines, control characters — survives verbatim,
//! and uses the JSON `null` literal to mark a deleted item. Static
//! metadata values (and their keys) follow the same convention.
//!
//! All of that convention lives here; nothing else in the workspace
//! touches raw engine values.

use thiserror::Error;

/// Engine value marking an item as deleted.
pub const TOMBSTONE: &str = "null";

/// Errors from encoding or decoding engine values.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The raw value is not a JSON string scalar or `null`.
    #[error("malformed engine value: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload bytes are not valid UTF-8 and cannot be carried as a
    /// JSON string.
    #[error("payload is not valid UTF-8: {0}")]
    NonUtf8Payload(#[from] std::str::Utf8Error),
}

/// Result alias for codec operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Encodes a payload as an engine value: a compact JSON string literal.
#[must_use]
pub fn encode_str(payload: &str) -> String {
    // Serializing a plain string cannot fail.
    serde_json::to_string(payload).expect("JSON string serialization is infallible")
}

/// Encodes payload bytes, which must be valid UTF-8.
///
/// An empty payload encodes to `""`, which stays distinct from the
/// deletion marker.
pub fn encode_bytes(payload: &[u8]) -> ValueResult<String> {
    Ok(encode_str(std::str::from_utf8(payload)?))
}

/// Decodes a raw engine value.
///
/// Returns `None` for the deletion marker (JSON `null`); an empty JSON
/// string decodes to an empty payload, never to `None`. Anything that is
/// not a JSON string or `null` is an error — callers log and skip such
/// entries rather than materializing the raw text.
pub fn decode_str(value: &str) -> ValueResult<Option<String>> {
    Ok(serde_json::from_str::<Option<String>>(value)?)
}

/// Byte view of [`decode_str`].
pub fn decode_bytes(value: &str) -> ValueResult<Option<Vec<u8>>> {
    Ok(decode_str(value)?.map(String::into_bytes))
}
