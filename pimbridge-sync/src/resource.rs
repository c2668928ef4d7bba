//! The bridge resource.
//!
//! Glue between the host framework's requests and the enumerator,
//! synchronizer, and writer components. All operations are discrete,
//! non-reentrant requests from the host's event loop; the resource
//! spawns no background work. The only suspension point is the
//! full-payload fetch ahead of a local write.

use crate::config::BridgeConfig;
use crate::enumerator::enumerate_collections;
use crate::error::{BridgeError, BridgeResult};
use crate::synchronizer::synchronize_collection;
use crate::writer::{delete_item, write_item};
use pimbridge_engine::SyncEngine;
use pimbridge_model::{Collection, Item, PayloadFetcher, PimHost, Status};
use pimbridge_types::AppId;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Bridges the host PIM framework to the synchronization engine.
pub struct BridgeResource {
    engine: Arc<dyn SyncEngine>,
    host: Arc<dyn PimHost>,
    fetcher: Arc<dyn PayloadFetcher>,
    config: BridgeConfig,
    app_id: AppId,
}

impl BridgeResource {
    /// Creates the resource, derives the per-install app id, and
    /// validates the configured storage location, reflecting the result
    /// in the host's online state.
    pub fn new(
        engine: Arc<dyn SyncEngine>,
        host: Arc<dyn PimHost>,
        fetcher: Arc<dyn PayloadFetcher>,
        config: BridgeConfig,
    ) -> Self {
        let app_id = engine.app_id(&config.app_namespace);
        debug!(app_id = %app_id, "bridge resource started");

        let resource = Self {
            engine,
            host,
            fetcher,
            config,
            app_id,
        };
        resource.check_storage_location();
        resource
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The per-install app id locally-originated entries are tagged with.
    #[must_use]
    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Re-validates the configured storage location and reports the
    /// outcome: online when valid, broken plus temporarily offline with
    /// the configured backoff when invalid, quietly offline when unset.
    pub fn check_storage_location(&self) {
        let Some(location) = self.config.storage_location.as_deref() else {
            self.host.set_online(false);
            return;
        };

        let status = self.engine.check_storage(location);
        if status.is_ok() {
            self.host.set_online(true);
        } else {
            let message = format!("{}: {status}", location.display());
            error!(code = status.code(), "{message}");
            self.host.status(Status::Broken, &message);
            self.host.set_online(false);
            self.host
                .set_temporary_offline(self.config.offline_retry_secs);
        }
    }

    /// Points the bridge at a new storage location.
    ///
    /// Rejects unchanged or invalid paths without touching the current
    /// configuration. On success the host is brought online and is
    /// expected to trigger a full re-synchronization.
    pub fn set_storage_location(&mut self, location: impl Into<PathBuf>) -> BridgeResult<()> {
        let location = location.into();
        if self.config.storage_location.as_deref() == Some(location.as_path()) {
            return Err(BridgeError::UnchangedLocation);
        }

        let status = self.engine.check_storage(&location);
        if !status.is_ok() {
            return Err(BridgeError::InvalidStorage { location, status });
        }

        debug!(location = %location.display(), "storage location updated");
        self.config.storage_location = Some(location);
        self.host.set_online(true);
        self.host.status(Status::Idle, "storage location updated");
        Ok(())
    }

    /// Host request: enumerate all collections.
    pub fn retrieve_collections(&self) {
        let collections = enumerate_collections(self.engine.as_ref(), &self.config, &self.app_id);
        self.host.collections_retrieved(collections);
    }

    /// Host request: all items of one collection.
    ///
    /// On failure the collection is reported broken and nothing is
    /// delivered; the host's re-fetch policy owns retries.
    pub fn retrieve_items(&self, collection_remote_id: &str) -> BridgeResult<()> {
        match synchronize_collection(
            self.engine.as_ref(),
            &self.config,
            &self.app_id,
            collection_remote_id,
        ) {
            Ok(items) => {
                self.host.items_retrieved(items);
                Ok(())
            }
            Err(err) => {
                warn!(collection = collection_remote_id, %err, "failed to synchronize collection");
                self.host.status(
                    Status::Broken,
                    &format!("failed to open collection {collection_remote_id}"),
                );
                Err(err)
            }
        }
    }

    /// Host hook: a local item was created.
    ///
    /// The hook delivers items without their payload, so the full
    /// payload is fetched first; the log write proceeds only in the
    /// continuation. A failed fetch or write leaves the change
    /// uncommitted for the host's change recorder to replay later.
    pub async fn item_added(&self, item: Item, collection_remote_id: &str) {
        let payload = match self.fetcher.fetch_payload(&item).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(item = %item.remote_id, %err, "couldn't add item: payload fetch failed");
                return;
            }
        };

        match write_item(
            self.engine.as_ref(),
            &self.config,
            &self.app_id,
            collection_remote_id,
            &item.remote_id,
            &payload,
        ) {
            Ok(()) => self.host.change_committed(&item),
            Err(err) => {
                warn!(item = %item.remote_id, %err, "couldn't add item: write failed");
            }
        }
    }

    /// Host hook: a local item was modified. Not translated into a log
    /// write; the change is consumed as processed.
    pub fn item_changed(&self, item: &Item) {
        debug!(item = %item.remote_id, "item change ignored");
        self.host.change_processed();
    }

    /// Host hook: a local item was deleted. Writes the tombstone entry.
    pub fn item_removed(&self, item: &Item, collection_remote_id: &str) {
        match delete_item(
            self.engine.as_ref(),
            &self.config,
            &self.app_id,
            collection_remote_id,
            &item.remote_id,
        ) {
            Ok(()) => self.host.change_committed(item),
            Err(err) => {
                warn!(item = %item.remote_id, %err, "couldn't delete item");
            }
        }
    }

    /// Host hook: a collection appeared on the host side. Collections
    /// are created at the storage layer, not here.
    pub fn collection_added(&self, collection: &Collection) {
        debug!(collection = %collection.remote_id, "host-side collection creation ignored");
        self.host.change_processed();
    }

    /// Host hook: collection attributes changed on the host side.
    pub fn collection_changed(&self, collection: &Collection, changed_attributes: &[String]) {
        debug!(
            collection = %collection.remote_id,
            attributes = changed_attributes.join("/"),
            "host-side collection change ignored"
        );
        self.host.change_processed();
    }

    /// Host hook: a collection disappeared on the host side.
    pub fn collection_removed(&self, collection: &Collection) {
        debug!(collection = %collection.remote_id, "host-side collection removal ignored");
        self.host.change_processed();
    }
}
