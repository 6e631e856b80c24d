//! Snapshot store trait and the in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use super::snapshot::UserSnapshot;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Snapshot encoding failed: {0}")]
    EncodeFailed(String),

    #[error("Snapshot decoding failed: {0}")]
    DecodeFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Durable key-value home for per-user snapshots.
///
/// The contract is wholesale: `load` returns the entire aggregate or nothing,
/// `save` overwrites it completely. Implementations must treat an unknown
/// user key as absent, not as an error.
pub trait SnapshotStore: Send {
    /// Load the snapshot for a user, if one has been saved.
    fn load(&self, user_key: &str) -> Result<Option<UserSnapshot>, StorageError>;

    /// Overwrite the snapshot for a user.
    fn save(&self, user_key: &str, snapshot: &UserSnapshot) -> Result<(), StorageError>;

    /// Remove the snapshot for a user. Returns false if none existed.
    fn delete(&self, user_key: &str) -> Result<bool, StorageError>;
}

/// Non-durable store backed by a map. Used in tests and by hosts that
/// want ledger behavior without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, user_key: &str) -> Result<Option<UserSnapshot>, StorageError> {
        match self.entries().get(user_key) {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| StorageError::DecodeFailed(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, user_key: &str, snapshot: &UserSnapshot) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(snapshot).map_err(|e| StorageError::EncodeFailed(e.to_string()))?;
        self.entries().insert(user_key.to_string(), json);
        Ok(())
    }

    fn delete(&self, user_key: &str) -> Result<bool, StorageError> {
        Ok(self.entries().remove(user_key).is_some())
    }
}
