//! Versioned migrations for the persisted state blobs.
//!
//! Migrations are applied automatically when opening the store. The
//! `schema_version` key in the kv table tracks the current version.

use crate::error::CoreError;

use super::store::{Store, KEY_QUESTS};

const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Current blob schema version.
///
/// Increment this when adding new migrations.
pub const CURRENT_VERSION: i64 = 2;

/// Apply all pending migrations.
pub fn migrate(store: &Store) -> Result<(), CoreError> {
    let current = get_version(store)?;
    if current < 1 {
        migrate_v1(store)?;
    }
    if current < 2 {
        migrate_v2(store)?;
    }
    Ok(())
}

fn get_version(store: &Store) -> Result<i64, CoreError> {
    Ok(store
        .kv_get(SCHEMA_VERSION_KEY)?
        .and_then(|v| v.parse().ok())
        .unwrap_or(0))
}

fn set_version(store: &Store, version: i64) -> Result<(), CoreError> {
    store.kv_set(SCHEMA_VERSION_KEY, &version.to_string())
}

/// v1: baseline. Blobs written before versioning carried no schema key.
fn migrate_v1(store: &Store) -> Result<(), CoreError> {
    set_version(store, 1)
}

/// v2: quest records gained a `difficulty` field.
///
/// Legacy records carried raw `xp`/`coins` reward fields instead; they have
/// no difficulty to map back to, so they are discarded.
fn migrate_v2(store: &Store) -> Result<(), CoreError> {
    if let Some(json) = store.kv_get(KEY_QUESTS)? {
        if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(&json) {
            let total = items.len();
            let kept: Vec<serde_json::Value> = items
                .into_iter()
                .filter(|item| item.get("difficulty").is_some())
                .collect();
            let dropped = total - kept.len();
            if dropped > 0 {
                tracing::warn!(dropped, "discarding legacy quest records without a difficulty");
            }
            store.kv_set(KEY_QUESTS, &serde_json::to_string(&kept)?)?;
        }
    }
    set_version(store, 2)
}
