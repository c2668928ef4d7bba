//! Bridge configuration.
//!
//! One explicit object passed into every component — the bridge reads no
//! ambient global state. The storage location is the single user-facing
//! setting and is mutated only through
//! [`BridgeResource::set_storage_location`](crate::BridgeResource::set_storage_location).

use crate::error::{BridgeError, BridgeResult};
use std::path::{Path, PathBuf};

/// Default bound on collections listed per type.
pub const DEFAULT_MAX_COLLECTIONS: usize = 256;

/// Default backoff, in seconds, before the host may retry a broken
/// storage location.
pub const DEFAULT_OFFLINE_RETRY_SECS: u32 = 60;

/// Bridge configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Root of the synchronization store; `None` until configured.
    pub storage_location: Option<PathBuf>,
    /// Upper bound on collection names listed per type.
    pub max_collections: usize,
    /// Backoff window reported alongside a broken storage location.
    pub offline_retry_secs: u32,
    /// Namespace the per-install app id is derived from.
    pub app_namespace: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            storage_location: None,
            max_collections: DEFAULT_MAX_COLLECTIONS,
            offline_retry_secs: DEFAULT_OFFLINE_RETRY_SECS,
            app_namespace: "pimbridge".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Configuration pointing at `location`, defaults otherwise.
    #[must_use]
    pub fn at(location: impl Into<PathBuf>) -> Self {
        Self {
            storage_location: Some(location.into()),
            ..Self::default()
        }
    }

    /// The storage location, or [`BridgeError::NotConfigured`].
    pub(crate) fn location(&self) -> BridgeResult<&Path> {
        self.storage_location
            .as_deref()
            .ok_or(BridgeError::NotConfigured)
    }
}
