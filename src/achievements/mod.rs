//! Achievement system: a fixed catalog of badges unlocked by usage stats.

pub mod catalog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::{StatMetric, UsageStats};

/// A badge not yet earned, tracking progress toward its requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockedAchievement {
    /// Stable key, unique across both pools
    pub id: String,
    /// Display name
    pub name: String,
    /// What must be done to earn it
    pub description: String,
    /// Counter the requirement is measured against
    pub metric: StatMetric,
    /// Counter value needed to unlock
    pub requirement: u32,
    /// Current counter value, as of the last refresh
    pub progress: u32,
    /// Icon name
    pub icon: String,
}

impl LockedAchievement {
    /// Get progress percentage (0-100).
    pub fn progress_percent(&self) -> f32 {
        if self.requirement == 0 {
            return 100.0;
        }
        (self.progress as f32 / self.requirement as f32 * 100.0).min(100.0)
    }
}

/// A badge that has been earned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Stable key, unique across both pools
    pub id: String,
    /// Display name
    pub name: String,
    /// What was done to earn it
    pub description: String,
    /// When it was earned
    pub unlocked_at: DateTime<Utc>,
    /// Icon name
    pub icon: String,
}

/// Emitted when a refresh pass unlocks an achievement.
#[derive(Debug, Clone)]
pub struct AchievementUnlocked {
    /// Stable key of the unlocked achievement
    pub id: String,
    /// Display name, for the notification text
    pub name: String,
    /// When it was unlocked
    pub unlocked_at: DateTime<Utc>,
}

/// The two disjoint achievement pools.
///
/// An id lives in exactly one pool. The only transition is locked to
/// unlocked; an unlocked entry is structurally unreachable by `refresh`,
/// which makes repeated passes idempotent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementBook {
    /// Earned badges
    #[serde(rename = "achievements", default)]
    unlocked: Vec<UnlockedAchievement>,
    /// Badges still being worked toward
    #[serde(rename = "locked_achievements", default)]
    locked: Vec<LockedAchievement>,
}

impl AchievementBook {
    /// The full catalog, all locked: the state of a fresh snapshot.
    pub fn starting() -> Self {
        Self {
            unlocked: Vec::new(),
            locked: catalog::starting_achievements(),
        }
    }

    /// Earned badges, in unlock order.
    pub fn unlocked(&self) -> &[UnlockedAchievement] {
        &self.unlocked
    }

    /// Badges still locked, in catalog order.
    pub fn locked(&self) -> &[LockedAchievement] {
        &self.locked
    }

    /// Whether an id exists in either pool.
    pub fn contains(&self, id: &str) -> bool {
        self.unlocked.iter().any(|a| a.id == id) || self.locked.iter().any(|a| a.id == id)
    }

    /// Get completion percentage (0-100) across the catalog.
    pub fn completion_percent(&self) -> f32 {
        let total = self.unlocked.len() + self.locked.len();
        if total == 0 {
            return 0.0;
        }
        self.unlocked.len() as f32 / total as f32 * 100.0
    }

    /// Update locked progress from stats and move any entries that reached
    /// their requirement into the unlocked pool.
    pub fn refresh(&mut self, stats: &UsageStats, now: DateTime<Utc>) -> Vec<AchievementUnlocked> {
        let mut unlocks = Vec::new();

        let mut i = 0;
        while i < self.locked.len() {
            let entry = &mut self.locked[i];
            entry.progress = stats.metric(entry.metric);

            if entry.progress >= entry.requirement {
                let entry = self.locked.remove(i);
                tracing::info!(id = %entry.id, "achievement unlocked");
                unlocks.push(AchievementUnlocked {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    unlocked_at: now,
                });
                self.unlocked.push(UnlockedAchievement {
                    id: entry.id,
                    name: entry.name,
                    description: entry.description,
                    unlocked_at: now,
                    icon: entry.icon,
                });
            } else {
                i += 1;
            }
        }

        unlocks
    }
}
