//! Change writing.
//!
//! Local item mutations become timestamped log entries. Each change
//! opens and closes its own session — a little overhead, in exchange for
//! failures staying isolated per item and no batching state to carry.

use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use pimbridge_engine::SyncEngine;
use pimbridge_types::{value, AppId, CollectionRef, EntryPath, ITEM_ENTRY_KEY};
use std::str::FromStr;
use tracing::debug;

/// Writes `payload` as the entry for `item_id`, superseding any earlier
/// entry at the same path.
///
/// The item id is whatever the creating side chose; the bridge never
/// fabricates one.
pub fn write_item(
    engine: &dyn SyncEngine,
    config: &BridgeConfig,
    app_id: &AppId,
    collection_remote_id: &str,
    item_id: &str,
    payload: &[u8],
) -> BridgeResult<()> {
    let encoded = value::encode_bytes(payload)?;
    set_item_value(engine, config, app_id, collection_remote_id, item_id, &encoded)
}

/// Marks `item_id` deleted by writing the tombstone value.
pub fn delete_item(
    engine: &dyn SyncEngine,
    config: &BridgeConfig,
    app_id: &AppId,
    collection_remote_id: &str,
    item_id: &str,
) -> BridgeResult<()> {
    set_item_value(
        engine,
        config,
        app_id,
        collection_remote_id,
        item_id,
        value::TOMBSTONE,
    )
}

fn set_item_value(
    engine: &dyn SyncEngine,
    config: &BridgeConfig,
    app_id: &AppId,
    collection_remote_id: &str,
    item_id: &str,
    raw_value: &str,
) -> BridgeResult<()> {
    let sync_ref = CollectionRef::from_str(collection_remote_id)?;
    let location = config.location()?;
    let mut session = engine.open_session(location, &sync_ref, app_id)?;
    session.set_entry(EntryPath::resource(item_id), ITEM_ENTRY_KEY, raw_value)?;
    debug!(collection = %sync_ref, item = item_id, "wrote entry");
    Ok(())
}
