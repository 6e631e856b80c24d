//! Storage module for snapshot persistence and configuration.

pub mod config;
pub mod schema;
pub mod snapshot;
pub mod sqlite;
pub mod store;

pub use config::{AppConfig, ConfigError, SessionSettings, StorageSettings};
pub use snapshot::UserSnapshot;
pub use sqlite::SqliteStore;
pub use store::{MemoryStore, SnapshotStore, StorageError};
