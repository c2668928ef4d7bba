//! Identifier types used by the bridge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable per-install application identifier.
///
/// The engine derives it from a namespace (see the engine contract) and
/// tags locally-originated entries with it so replicas can tell their own
/// writes apart. The bridge treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Wraps an engine-derived identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
