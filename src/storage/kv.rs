//! Local key-value store.
//!
//! Values are JSON text under fixed string keys, the same records a browser
//! would keep in `localStorage`.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Database;
use crate::error::PsySafeError;

/// Key-value store backed by the `local_storage` table.
pub struct KeyValueStore {
    db: Database,
}

impl KeyValueStore {
    /// Open the store in the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, PsySafeError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Wrap an existing database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// In-memory store for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self, PsySafeError> {
        Ok(Self::with_database(Database::open_in_memory()?))
    }

    /// Raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, PsySafeError> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| PsySafeError::Database(format!("Failed to read '{key}': {e}")))
    }

    /// Store a raw value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), PsySafeError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| PsySafeError::Database(format!("Failed to write '{key}': {e}")))?;
        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    /// Remove a key. Returns true if something was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<bool, PsySafeError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])
            .map_err(|e| PsySafeError::Database(format!("Failed to remove '{key}': {e}")))?;
        Ok(rows > 0)
    }

    /// Typed value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::Parse` if the stored JSON does not match `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PsySafeError> {
        self.get_raw(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    PsySafeError::Parse(format!("Stored value for '{key}' is invalid: {e}"))
                })
            })
            .transpose()
    }

    /// Store `value` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), PsySafeError> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
