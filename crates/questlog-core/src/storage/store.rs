//! SQLite-backed key-value persistence for the four state slices.
//!
//! Each slice (hero, quests, streaks, session) is one JSON blob in a `kv`
//! table, read once at startup and overwritten wholesale on every change.
//! There is no partial update and no transaction across slices.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use super::data_dir;
use crate::error::{CoreError, StorageError};

pub const KEY_HERO: &str = "hero";
pub const KEY_QUESTS: &str = "quests";
pub const KEY_STREAKS: &str = "streaks";
pub const KEY_SESSION: &str = "session";

/// SQLite database holding the persisted state blobs.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database at `~/.config/questlog/questlog.db`.
    ///
    /// Creates the file and schema if they don't exist and applies pending
    /// blob migrations.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("questlog.db");
        Self::open_at(&path)
    }

    /// Open a database at an explicit path (tests use a temp dir).
    pub fn open_at(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.create_schema()?;
        super::migrations::migrate(&store)?;
        Ok(store)
    }

    /// Open an in-memory database (tests and ephemeral runs).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let store = Self { conn };
        store.create_schema()?;
        super::migrations::migrate(&store)?;
        Ok(store)
    }

    fn create_schema(&self) -> Result<(), CoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a raw value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a raw value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), CoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Load one state slice, deserialized from its JSON blob.
    pub fn load_slice<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        match self.kv_get(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Overwrite one state slice wholesale.
    pub fn save_slice<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value)?;
        self.kv_set(key, &json)
    }
}
