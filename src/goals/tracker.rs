//! Goal progress tracking against usage stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Goal, GoalCategory};
use crate::stats::UsageStats;

/// Emitted when a refresh pass flips a goal to completed.
#[derive(Debug, Clone)]
pub struct GoalCompleted {
    /// Goal that completed
    pub goal_id: Uuid,
    /// Goal title, for the notification text
    pub title: String,
    /// When completion was detected
    pub completed_at: DateTime<Utc>,
}

/// The user's goals, with refresh and creation logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalBook {
    goals: Vec<Goal>,
}

impl GoalBook {
    /// The default goals seeded into a fresh snapshot.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            goals: vec![
                Goal::new(
                    "Complete 5 practice interviews",
                    GoalCategory::Interview,
                    5,
                    now,
                ),
                Goal::new("Create your first resume", GoalCategory::Resume, 1, now),
                Goal::new("Practice for 60 minutes", GoalCategory::Time, 60, now),
            ],
        }
    }

    /// All goals, in creation order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal by id.
    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Re-derive every goal's progress from the current stats.
    ///
    /// `current` only ever moves up, clamped to `target`. A goal whose
    /// category has no backing counter keeps its progress unchanged.
    /// Completion is one-way; a goal already completed is never revisited.
    pub fn refresh(&mut self, stats: &UsageStats, now: DateTime<Utc>) -> Vec<GoalCompleted> {
        let mut completions = Vec::new();

        for goal in &mut self.goals {
            let Some(metric) = goal.category.metric() else {
                continue;
            };

            let new_current = stats.metric(metric).min(goal.target);
            if new_current > goal.current {
                goal.current = new_current;
            }

            if goal.current >= goal.target && !goal.completed {
                goal.completed = true;
                goal.completed_at = Some(now);
                completions.push(GoalCompleted {
                    goal_id: goal.id,
                    title: goal.title.clone(),
                    completed_at: now,
                });
            }
        }

        completions
    }

    /// Create a goal, seeding its progress from present-day stats.
    ///
    /// A goal whose target is already met at creation starts out completed.
    pub fn add(
        &mut self,
        title: &str,
        category: GoalCategory,
        target: u32,
        stats: &UsageStats,
        now: DateTime<Utc>,
    ) -> Goal {
        let mut goal = Goal::new(title, category, target, now);

        if let Some(metric) = goal.category.metric() {
            goal.current = stats.metric(metric).min(goal.target);
            if goal.current >= goal.target {
                goal.completed = true;
                goal.completed_at = Some(now);
            }
        }

        self.goals.push(goal.clone());
        goal
    }
}
