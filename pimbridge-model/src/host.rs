//! The host-framework seam.
//!
//! The bridge never calls into the host directly; it delivers results and
//! health through [`PimHost`] and obtains full item payloads through the
//! asynchronous [`PayloadFetcher`], which mirrors the host's own
//! fetch-job facility. Both are trait objects so tests can substitute
//! the recording implementations in [`mock`].

use crate::{Collection, Item};
use async_trait::async_trait;
use thiserror::Error;

/// Health states reported to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing in flight.
    Idle,
    /// An operation is in progress.
    Running,
    /// A storage-level failure; the host should surface it to the user.
    Broken,
}

/// Error delivering a full item payload.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The host's fetch job failed.
    #[error("payload fetch failed: {0}")]
    Failed(String),

    /// The host has no payload for the item.
    #[error("no payload available for item {0}")]
    Missing(String),
}

/// Notification sink exposed by the host framework.
///
/// Calls arrive from the host's single event loop; implementations are
/// not expected to be reentrant.
pub trait PimHost: Send + Sync {
    /// Delivers the result of a collection enumeration.
    fn collections_retrieved(&self, collections: Vec<Collection>);

    /// Delivers the items of one collection.
    fn items_retrieved(&self, items: Vec<Item>);

    /// A local change reached the log; the host may mark it replayed.
    fn change_committed(&self, item: &Item);

    /// A local change was consumed without a log write.
    fn change_processed(&self);

    /// Reports bridge health.
    fn status(&self, status: Status, message: &str);

    /// Reflects storage-location reachability.
    fn set_online(&self, online: bool);

    /// Goes offline with a fixed backoff before the host may retry.
    fn set_temporary_offline(&self, retry_after_secs: u32);
}

/// Asynchronous full-payload fetch provided by the host framework.
///
/// Items arrive at the bridge's change hooks without their payload; the
/// write to the log only proceeds once this fetch completes.
#[async_trait]
pub trait PayloadFetcher: Send + Sync {
    /// Fetches the full payload of `item`.
    async fn fetch_payload(&self, item: &Item) -> Result<Vec<u8>, FetchError>;
}

/// Mock host implementations for testing.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Everything a [`RecordingHost`] saw, for assertions.
    #[derive(Debug, Clone, Default)]
    pub struct HostRecord {
        pub collections: Vec<Vec<Collection>>,
        pub items: Vec<Vec<Item>>,
        pub committed: Vec<Item>,
        pub processed: usize,
        pub statuses: Vec<(Status, String)>,
        pub online: Vec<bool>,
        pub offline_backoffs: Vec<u32>,
    }

    /// A host that records every notification.
    #[derive(Clone, Default)]
    pub struct RecordingHost {
        record: Arc<Mutex<HostRecord>>,
    }

    impl RecordingHost {
        /// Creates an empty recording host.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of everything recorded so far.
        #[must_use]
        pub fn record(&self) -> HostRecord {
            self.record.lock().unwrap().clone()
        }

        /// The most recent status report, if any.
        #[must_use]
        pub fn last_status(&self) -> Option<(Status, String)> {
            self.record.lock().unwrap().statuses.last().cloned()
        }
    }

    impl PimHost for RecordingHost {
        fn collections_retrieved(&self, collections: Vec<Collection>) {
            self.record.lock().unwrap().collections.push(collections);
        }

        fn items_retrieved(&self, items: Vec<Item>) {
            self.record.lock().unwrap().items.push(items);
        }

        fn change_committed(&self, item: &Item) {
            self.record.lock().unwrap().committed.push(item.clone());
        }

        fn change_processed(&self) {
            self.record.lock().unwrap().processed += 1;
        }

        fn status(&self, status: Status, message: &str) {
            self.record
                .lock()
                .unwrap()
                .statuses
                .push((status, message.to_string()));
        }

        fn set_online(&self, online: bool) {
            self.record.lock().unwrap().online.push(online);
        }

        fn set_temporary_offline(&self, retry_after_secs: u32) {
            self.record
                .lock()
                .unwrap()
                .offline_backoffs
                .push(retry_after_secs);
        }
    }

    /// A fetcher serving canned payloads keyed by item remote id.
    #[derive(Clone, Default)]
    pub struct StaticFetcher {
        payloads: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        failing: Arc<Mutex<bool>>,
    }

    impl StaticFetcher {
        /// Creates an empty fetcher.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers the payload served for `remote_id`.
        pub fn insert(&self, remote_id: impl Into<String>, payload: impl Into<Vec<u8>>) {
            self.payloads
                .lock()
                .unwrap()
                .insert(remote_id.into(), payload.into());
        }

        /// Makes every subsequent fetch fail.
        pub fn fail_all(&self) {
            *self.failing.lock().unwrap() = true;
        }
    }

    #[async_trait]
    impl PayloadFetcher for StaticFetcher {
        async fn fetch_payload(&self, item: &Item) -> Result<Vec<u8>, FetchError> {
            if *self.failing.lock().unwrap() {
                return Err(FetchError::Failed("fetch job error".to_string()));
            }
            self.payloads
                .lock()
                .unwrap()
                .get(&item.remote_id)
                .cloned()
                .ok_or_else(|| FetchError::Missing(item.remote_id.clone()))
        }
    }
}
