//! Goal type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stats::StatMetric;

/// Category a goal is measured against.
///
/// The known categories map onto a stats counter. Unrecognized input is
/// preserved as `Other`; such goals are valid but never progress on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Practice interview sessions
    Interview,
    /// Resumes created
    Resume,
    /// Practice minutes
    Time,
    /// Custom category with no backing counter
    Other(String),
}

impl GoalCategory {
    /// Parse user input into a category. Unrecognized names are kept as-is.
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "interview" => GoalCategory::Interview,
            "resume" => GoalCategory::Resume,
            "time" => GoalCategory::Time,
            _ => GoalCategory::Other(s.to_string()),
        }
    }

    /// The stats counter backing this category, if any.
    pub fn metric(&self) -> Option<StatMetric> {
        match self {
            GoalCategory::Interview => Some(StatMetric::InterviewSessions),
            GoalCategory::Resume => Some(StatMetric::ResumesCreated),
            GoalCategory::Time => Some(StatMetric::PracticeMinutes),
            GoalCategory::Other(_) => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &str {
        match self {
            GoalCategory::Interview => "Interview",
            GoalCategory::Resume => "Resume",
            GoalCategory::Time => "Practice Time",
            GoalCategory::Other(name) => name,
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A target/current counter pair with a one-way completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Category driving progress
    pub category: GoalCategory,
    /// Target value (always at least 1)
    pub target: u32,
    /// Current progress, clamped to `target`
    pub current: u32,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// Whether the goal has been reached
    pub completed: bool,
    /// When the goal was reached
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create a new goal with zero progress.
    pub fn new(title: &str, category: GoalCategory, target: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category,
            target,
            current: 0,
            created_at: now,
            completed: false,
            completed_at: None,
        }
    }

    /// Get progress percentage (0-100).
    pub fn progress_percent(&self) -> f32 {
        if self.target == 0 {
            return 0.0;
        }
        (self.current as f32 / self.target as f32 * 100.0).min(100.0)
    }
}
