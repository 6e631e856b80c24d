//! Unit tests for snapshot export documents.

use chrono::Utc;
use preptrack::activity::{ActivityCategory, ActivityDetails};
use preptrack::export::SnapshotExport;
use preptrack::storage::UserSnapshot;

#[test]
fn test_csv_row_per_record_across_categories() {
    let now = Utc::now();
    let mut snapshot = UserSnapshot::seeded(now);
    for category in ActivityCategory::ALL {
        snapshot
            .activities
            .record(category, ActivityDetails::empty_for(category), now);
    }

    let export = SnapshotExport::from_snapshot("user@example.com", &snapshot, now);
    let csv = export.to_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("Interview,"));
    assert!(lines[4].starts_with("Login,"));
}

#[test]
fn test_csv_doubles_embedded_quotes() {
    let now = Utc::now();
    let mut snapshot = UserSnapshot::seeded(now);
    snapshot.activities.record(
        ActivityCategory::Resume,
        ActivityDetails::Resume {
            template: Some("says \"hire me\"".to_string()),
        },
        now,
    );

    let export = SnapshotExport::from_snapshot("user@example.com", &snapshot, now);
    let csv = export.to_csv().unwrap();

    assert!(csv.contains(r#""template=says ""hire me""""#));
}

#[test]
fn test_json_export_carries_stats_and_activities() {
    let now = Utc::now();
    let mut snapshot = UserSnapshot::seeded(now);
    snapshot.activities.record(
        ActivityCategory::Interview,
        ActivityDetails::Interview { score: Some(91) },
        now,
    );
    snapshot.stats.increment(ActivityCategory::Interview, now);

    let export = SnapshotExport::from_snapshot("user@example.com", &snapshot, now);
    let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

    assert_eq!(value["user"], "user@example.com");
    assert_eq!(value["stats"]["interview_sessions"], 1);
    assert_eq!(value["activity_data"]["interviews"][0]["details"]["score"], 91);
}
