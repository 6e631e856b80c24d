//! Unit tests for session duration accrual.

use chrono::{Duration, Utc};
use preptrack::activity::{ActivityCategory, ActivityDetails, ActivityLog};

fn log_with_one(category: ActivityCategory) -> (ActivityLog, chrono::DateTime<Utc>) {
    let start = Utc::now();
    let mut log = ActivityLog::default();
    log.record(category, ActivityDetails::empty_for(category), start);
    (log, start)
}

#[test]
fn test_rerun_without_time_advance_credits_nothing() {
    let (mut log, start) = log_with_one(ActivityCategory::Interview);
    let now = start + Duration::minutes(4);

    assert_eq!(log.update_durations(start, now).credited_minutes, 4);
    assert_eq!(log.update_durations(start, now).credited_minutes, 0);
    assert_eq!(log.update_durations(start, now).credited_minutes, 0);

    assert_eq!(
        log.records(ActivityCategory::Interview)[0].duration_minutes,
        4
    );
}

#[test]
fn test_duration_never_decreases() {
    let (mut log, start) = log_with_one(ActivityCategory::Chat);

    log.update_durations(start, start + Duration::minutes(10));
    // A clock stepping backwards leaves the stored duration alone
    let tick = log.update_durations(start, start + Duration::minutes(6));
    assert_eq!(tick.credited_minutes, 0);
    assert_eq!(log.records(ActivityCategory::Chat)[0].duration_minutes, 10);
}

#[test]
fn test_credit_sums_across_accruing_records() {
    let start = Utc::now();
    let mut log = ActivityLog::default();
    log.record(
        ActivityCategory::Interview,
        ActivityDetails::Interview { score: None },
        start,
    );
    log.record(
        ActivityCategory::Chat,
        ActivityDetails::Chat {
            message_count: None,
        },
        start + Duration::minutes(1),
    );
    log.record(
        ActivityCategory::Resume,
        ActivityDetails::Resume { template: None },
        start,
    );

    let tick = log.update_durations(start, start + Duration::minutes(3));
    // interview: 3, chat: 2, resume updates but never credits
    assert_eq!(tick.credited_minutes, 5);
    assert_eq!(tick.updated_records, 3);
}

#[test]
fn test_partial_minute_credits_nothing() {
    let (mut log, start) = log_with_one(ActivityCategory::Interview);

    let tick = log.update_durations(start, start + Duration::seconds(59));
    assert_eq!(tick.credited_minutes, 0);
    assert_eq!(tick.updated_records, 0);
}
