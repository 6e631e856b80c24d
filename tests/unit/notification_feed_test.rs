//! Unit tests for notification feed maintenance.

use chrono::{Duration, Utc};
use preptrack::notifications::{NotificationFeed, NotificationKind, FEED_CAPACITY};
use uuid::Uuid;

#[test]
fn test_twenty_five_pushes_keep_newest_twenty() {
    let base = Utc::now();
    let mut feed = NotificationFeed::default();

    for i in 0..25 {
        feed.push(
            NotificationKind::Info,
            &format!("n{}", i),
            "",
            base + Duration::seconds(i),
        );
    }

    assert_eq!(feed.len(), FEED_CAPACITY);
    let titles: Vec<&str> = feed.items().iter().map(|n| n.title.as_str()).collect();
    for dropped in 0..5 {
        assert!(!titles.contains(&format!("n{}", dropped).as_str()));
    }
}

#[test]
fn test_feed_sorted_descending_after_every_push() {
    let base = Utc::now();
    let mut feed = NotificationFeed::default();

    // Out-of-order arrival
    for offset in [5i64, 1, 9, 3, 7] {
        feed.push(
            NotificationKind::Info,
            "n",
            "",
            base + Duration::seconds(offset),
        );

        let stamps: Vec<_> = feed.items().iter().map(|n| n.timestamp).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }
}

#[test]
fn test_missing_id_is_a_silent_no_op() {
    let mut feed = NotificationFeed::default();
    feed.push(NotificationKind::Warning, "only", "", Utc::now());

    assert!(!feed.mark_read(Uuid::new_v4()));
    assert!(!feed.dismiss(Uuid::new_v4()));

    assert_eq!(feed.len(), 1);
    assert_eq!(feed.unread_count(), 1);
}

#[test]
fn test_mark_all_read_then_dismiss() {
    let base = Utc::now();
    let mut feed = NotificationFeed::default();
    let first = feed.push(NotificationKind::Info, "a", "", base);
    feed.push(NotificationKind::Success, "b", "", base + Duration::seconds(1));

    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);

    assert!(feed.dismiss(first.id));
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.items()[0].title, "b");
}
