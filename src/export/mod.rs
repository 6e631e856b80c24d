//! Snapshot export as downloadable JSON and CSV documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::activity::ActivityLog;
use crate::stats::UsageStats;
use crate::storage::UserSnapshot;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodeFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// A user's exportable data: stats plus the full activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// User key the data belongs to
    pub user: String,
    /// When the export was produced
    pub export_date: DateTime<Utc>,
    /// Running usage counters
    pub stats: UsageStats,
    /// Per-category activity lists
    pub activity_data: ActivityLog,
}

impl SnapshotExport {
    /// Build an export document from a snapshot.
    pub fn from_snapshot(user_key: &str, snapshot: &UserSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            user: user_key.to_string(),
            export_date: now,
            stats: snapshot.stats.clone(),
            activity_data: snapshot.activities.clone(),
        }
    }

    /// Serialize the export as a pretty JSON document.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::EncodeFailed(e.to_string()))
    }

    /// Flatten every activity record into `Type,Date,Duration,Details` rows.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut output = Vec::new();

        writeln!(output, "Type,Date,Duration,Details")
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        for record in self.activity_data.iter_all() {
            writeln!(
                output,
                "{},{},{},{}",
                csv_field(record.category.display_name()),
                csv_field(&record.timestamp.to_rfc3339()),
                record.duration_minutes,
                csv_field(&record.details.summary()),
            )
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        }

        String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
    }
}

/// Quote a CSV field when needed, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Generate a default filename for an export.
pub fn generate_export_filename(user_key: &str, now: DateTime<Utc>) -> String {
    let stem: String = user_key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("PrepTrack_{}_{}.json", stem, now.format("%Y%m%d_%H%M%S"))
}
