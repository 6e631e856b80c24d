//! Unit tests for goal progress and completion.

use chrono::Utc;
use preptrack::activity::ActivityCategory;
use preptrack::goals::{GoalBook, GoalCategory};
use preptrack::stats::UsageStats;

fn stats(interviews: u32, resumes: u32, minutes: u32) -> UsageStats {
    let mut stats = UsageStats::default();
    let now = Utc::now();
    for _ in 0..interviews {
        stats.increment(ActivityCategory::Interview, now);
    }
    for _ in 0..resumes {
        stats.increment(ActivityCategory::Resume, now);
    }
    stats.add_practice_minutes(minutes, now);
    stats
}

#[test]
fn test_seed_goal_completes_at_five_interviews() {
    let now = Utc::now();
    let mut book = GoalBook::seeded(now);

    let completions = book.refresh(&stats(5, 0, 0), now);

    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].title, "Complete 5 practice interviews");

    let goal = book
        .goals()
        .iter()
        .find(|g| g.category == GoalCategory::Interview)
        .unwrap();
    assert!(goal.completed);
    assert_eq!(goal.current, 5);
    assert!(goal.completed_at.is_some());
}

#[test]
fn test_current_never_exceeds_target() {
    let now = Utc::now();
    let mut book = GoalBook::seeded(now);

    book.refresh(&stats(50, 10, 500), now);

    for goal in book.goals() {
        assert!(goal.current <= goal.target);
    }
}

#[test]
fn test_completion_is_one_way() {
    let now = Utc::now();
    let mut book = GoalBook::seeded(now);

    book.refresh(&stats(5, 0, 0), now);
    let completed_at = book.goals()[0].completed_at;

    // Later refreshes never flip the flag back or move the completion time
    book.refresh(&stats(6, 0, 0), now);
    assert!(book.goals()[0].completed);
    assert_eq!(book.goals()[0].completed_at, completed_at);
}

#[test]
fn test_goal_created_against_live_stats() {
    let now = Utc::now();
    let mut book = GoalBook::default();

    let goal = book.add("Practice an hour", GoalCategory::Time, 60, &stats(0, 0, 45), now);
    assert_eq!(goal.current, 45);
    assert!(!goal.completed);

    let born_done = book.add("Warmup", GoalCategory::Time, 30, &stats(0, 0, 45), now);
    assert!(born_done.completed);
}

#[test]
fn test_unrecognized_category_goal_stays_at_zero() {
    let now = Utc::now();
    let mut book = GoalBook::default();

    let goal = book.add(
        "Read 10 books",
        GoalCategory::from_input("reading"),
        10,
        &stats(20, 20, 2000),
        now,
    );
    assert_eq!(goal.current, 0);

    book.refresh(&stats(30, 30, 3000), now);
    let goal = book.goals().last().unwrap();
    assert_eq!(goal.current, 0);
    assert!(!goal.completed);
}
