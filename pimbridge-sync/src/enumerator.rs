//! Collection enumeration.
//!
//! Projects the engine's collections into the host hierarchy: one
//! synthetic folder per collection type, one read-only sub-collection
//! per engine collection.

use crate::config::BridgeConfig;
use pimbridge_engine::SyncEngine;
use pimbridge_model::Collection;
use pimbridge_types::{value, AppId, CollectionRef, CollectionType};
use std::path::Path;
use tracing::{debug, warn};

/// Lists every PIM collection at the configured storage location.
///
/// Never fails as a whole: an unset storage location yields an empty
/// list, a type whose listing fails contributes only its folder, and a
/// collection whose session cannot be opened is logged and skipped.
/// Idempotent; nothing is cached between calls.
#[must_use]
pub fn enumerate_collections(
    engine: &dyn SyncEngine,
    config: &BridgeConfig,
    app_id: &AppId,
) -> Vec<Collection> {
    let mut collections = Vec::new();
    let Some(location) = config.storage_location.as_deref() else {
        return collections;
    };

    for kind in CollectionType::ALL {
        collections.push(Collection::type_folder(kind));

        let names = match engine.list_collections(location, kind, config.max_collections) {
            Ok(names) => names,
            Err(err) => {
                warn!(kind = %kind, %err, "failed to list collections");
                continue;
            }
        };
        debug!(
            kind = %kind,
            found = names.len(),
            max = config.max_collections,
            "listed collections"
        );

        for name in names {
            let sync_ref = match CollectionRef::new(kind, name) {
                Ok(sync_ref) => sync_ref,
                Err(err) => {
                    warn!(kind = %kind, %err, "skipping collection with unusable name");
                    continue;
                }
            };

            // Opening validates the collection before it is surfaced.
            match engine.open_session(location, &sync_ref, app_id) {
                Ok(session) => drop(session),
                Err(err) => {
                    warn!(collection = %sync_ref, %err, "failed to initialize collection");
                    continue;
                }
            }

            let name = display_name(engine, location, &sync_ref);
            collections.push(Collection::projection(&sync_ref, name));
        }
    }

    collections
}

/// The collection's display name from static info, falling back to the
/// engine-assigned name when the metadata is missing or malformed.
fn display_name(engine: &dyn SyncEngine, location: &Path, sync_ref: &CollectionRef) -> String {
    let raw = match engine.static_info(location, sync_ref, &value::encode_str("name")) {
        Ok(Some(raw)) => raw,
        Ok(None) => return sync_ref.name().to_string(),
        Err(err) => {
            debug!(collection = %sync_ref, %err, "no display-name metadata");
            return sync_ref.name().to_string();
        }
    };

    match value::decode_str(&raw) {
        Ok(Some(name)) if !name.is_empty() => name,
        Ok(_) => sync_ref.name().to_string(),
        Err(err) => {
            debug!(collection = %sync_ref, %err, "malformed display-name metadata");
            sync_ref.name().to_string()
        }
    }
}
