//! Item synchronization.
//!
//! Replays every stored entry of one collection into PIM items. The
//! engine has already collapsed superseded writes before replay, so the
//! bridge only has to project what it is handed.

use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use pimbridge_engine::SyncEngine;
use pimbridge_model::Item;
use pimbridge_types::{value, AppId, CollectionRef, EntryPath};
use std::str::FromStr;
use tracing::{debug, warn};

/// Replays the stored item entries of the collection identified by
/// `remote_id` into PIM items.
///
/// Tombstoned items are never materialized, during initial replay and
/// live updates alike. An entry with a malformed value is logged and
/// skipped individually — it must not surface as an item wrapping the
/// raw text. A session that fails to open is a hard error: the caller
/// reports the collection broken and returns no items, leaving retries
/// to the host's own re-fetch policy.
pub fn synchronize_collection(
    engine: &dyn SyncEngine,
    config: &BridgeConfig,
    app_id: &AppId,
    remote_id: &str,
) -> BridgeResult<Vec<Item>> {
    let sync_ref = CollectionRef::from_str(remote_id)?;
    let location = config.location()?;
    let session = engine.open_session(location, &sync_ref, app_id)?;

    let mime_type = sync_ref.kind().item_content_type();
    let mut items = Vec::new();
    for entry in session.stored_entries(&EntryPath::resources_root())? {
        let Some(item_id) = entry.item_id() else {
            debug!(path = %entry.path, "ignoring entry outside resources/<item-id>");
            continue;
        };
        match value::decode_bytes(&entry.value) {
            // Tombstone: the item does not exist.
            Ok(None) => {}
            Ok(Some(payload)) => {
                debug!(
                    collection = %sync_ref,
                    item = item_id,
                    datetime = %entry.datetime,
                    "replayed entry"
                );
                items.push(Item::new(item_id, mime_type, payload));
            }
            Err(err) => {
                warn!(
                    collection = %sync_ref,
                    item = item_id,
                    %err,
                    "skipping entry with malformed value"
                );
            }
        }
    }

    Ok(items)
}
