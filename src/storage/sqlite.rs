//! SQLite-backed snapshot store using rusqlite.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::PathBuf;

use super::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use super::snapshot::UserSnapshot;
use super::store::{SnapshotStore, StorageError};

/// Durable snapshot store over a single SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store at the given path.
    pub fn open(path: &PathBuf) -> Result<Self, StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let store = Self { conn };
        store.initialize()?;

        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let store = Self { conn };
        store.initialize()?;

        Ok(store)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, StorageError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(StorageError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), StorageError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            tracing::info!("Snapshot store migrated to version {}", CURRENT_VERSION);
        }

        // Future migrations would go here:
        // if from_version < 2 { ... }

        Ok(())
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self, user_key: &str) -> Result<Option<UserSnapshot>, StorageError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT snapshot FROM snapshots WHERE user_key = ?1",
                params![user_key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        match json {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StorageError::DecodeFailed(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, user_key: &str, snapshot: &UserSnapshot) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(snapshot).map_err(|e| StorageError::EncodeFailed(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO snapshots (user_key, snapshot, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(user_key) DO UPDATE SET
                     snapshot = excluded.snapshot,
                     updated_at = excluded.updated_at",
                params![user_key, json, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    fn delete(&self, user_key: &str) -> Result<bool, StorageError> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM snapshots WHERE user_key = ?1",
                params![user_key],
            )
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        Ok(deleted > 0)
    }
}
