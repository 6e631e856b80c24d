//! The per-user persisted aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementBook;
use crate::activity::ActivityLog;
use crate::goals::GoalBook;
use crate::notifications::{NotificationFeed, NotificationKind};
use crate::stats::UsageStats;

/// Complete per-user state: activities, stats, goals, achievements,
/// and notifications. Read and rewritten as a whole on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Per-category activity lists
    #[serde(default)]
    pub activities: ActivityLog,
    /// Running usage counters
    #[serde(default)]
    pub stats: UsageStats,
    /// Goals
    #[serde(default)]
    pub goals: GoalBook,
    /// Achievement pools (`achievements` / `locked_achievements` keys)
    #[serde(flatten)]
    pub achievements: AchievementBook,
    /// Notification feed
    #[serde(default)]
    pub notifications: NotificationFeed,
}

impl UserSnapshot {
    /// First-use state: seed goals, the full locked achievement catalog,
    /// and a welcome notification.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut notifications = NotificationFeed::default();
        notifications.push(
            NotificationKind::Info,
            "Welcome to PrepTrack",
            "Record a practice interview to start making progress.",
            now,
        );

        Self {
            activities: ActivityLog::default(),
            stats: UsageStats::default(),
            goals: GoalBook::seeded(now),
            achievements: AchievementBook::starting(),
            notifications,
        }
    }
}
