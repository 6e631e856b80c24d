//! Unit tests for achievement pool transitions.

use chrono::Utc;
use preptrack::achievements::AchievementBook;
use preptrack::activity::ActivityCategory;
use preptrack::stats::UsageStats;

fn stats_with(category: ActivityCategory, count: u32) -> UsageStats {
    let mut stats = UsageStats::default();
    let now = Utc::now();
    for _ in 0..count {
        stats.increment(category, now);
    }
    stats
}

#[test]
fn test_every_id_lives_in_exactly_one_pool() {
    let now = Utc::now();
    let mut book = AchievementBook::starting();

    // Walk stats up step by step; the invariant holds at every point
    for interviews in 0..12 {
        book.refresh(&stats_with(ActivityCategory::Interview, interviews), now);

        let mut ids: Vec<&str> = book
            .locked()
            .iter()
            .map(|a| a.id.as_str())
            .chain(book.unlocked().iter().map(|a| a.id.as_str()))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(before, 4);
    }
}

#[test]
fn test_retrigger_does_not_duplicate_unlock() {
    let now = Utc::now();
    let mut book = AchievementBook::starting();
    let stats = stats_with(ActivityCategory::Interview, 1);

    let first = book.refresh(&stats, now);
    assert_eq!(first.len(), 1);

    // Simulated re-trigger with identical stats
    let second = book.refresh(&stats, now);
    assert!(second.is_empty());
    assert_eq!(
        book.unlocked()
            .iter()
            .filter(|a| a.id == "first_interview")
            .count(),
        1
    );
}

#[test]
fn test_unlocked_never_returns_to_locked() {
    let now = Utc::now();
    let mut book = AchievementBook::starting();

    book.refresh(&stats_with(ActivityCategory::Resume, 3), now);
    assert!(book.unlocked().iter().any(|a| a.id == "resume_pro"));

    // Refreshing against all-zero stats cannot re-lock anything
    book.refresh(&UsageStats::default(), now);
    assert!(book.unlocked().iter().any(|a| a.id == "resume_pro"));
    assert!(!book.locked().iter().any(|a| a.id == "resume_pro"));
}

#[test]
fn test_chatty_requires_ten_interactions() {
    let now = Utc::now();
    let mut book = AchievementBook::starting();

    book.refresh(&stats_with(ActivityCategory::Chat, 9), now);
    assert!(book.locked().iter().any(|a| a.id == "chatty"));

    book.refresh(&stats_with(ActivityCategory::Chat, 10), now);
    assert!(book.unlocked().iter().any(|a| a.id == "chatty"));
}
