//! Database schema definitions for the snapshot store.

/// SQL schema for the snapshot table.
pub const SCHEMA: &str = r#"
-- One row per user; the snapshot column holds the whole aggregate as JSON
CREATE TABLE IF NOT EXISTS snapshots (
    user_key TEXT PRIMARY KEY,
    snapshot TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// SQL for creating the schema version tracking table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;
