//! Running usage counters derived from activity recording.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCategory;

/// Counter fields that goals and achievements are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatMetric {
    /// Practice interview sessions completed
    InterviewSessions,
    /// Chatbot conversations held
    ChatbotInteractions,
    /// Resumes created
    ResumesCreated,
    /// Total practice minutes across interviews and chats
    PracticeMinutes,
}

impl StatMetric {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StatMetric::InterviewSessions => "Interview Sessions",
            StatMetric::ChatbotInteractions => "Chatbot Interactions",
            StatMetric::ResumesCreated => "Resumes Created",
            StatMetric::PracticeMinutes => "Practice Minutes",
        }
    }
}

impl std::fmt::Display for StatMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Monotonic usage counters for one user.
///
/// Counters never decrement. Fields missing from a stored snapshot
/// deserialize to zero rather than failing the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageStats {
    /// Practice interview sessions completed
    #[serde(default)]
    pub interview_sessions: u32,
    /// Chatbot conversations held
    #[serde(default)]
    pub chatbot_interactions: u32,
    /// Resumes created
    #[serde(default)]
    pub resumes_created: u32,
    /// Accrued practice minutes (interviews and chats)
    #[serde(default)]
    pub total_practice_minutes: u32,
    /// When any counter last changed
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            interview_sessions: 0,
            chatbot_interactions: 0,
            resumes_created: 0,
            total_practice_minutes: 0,
            last_updated: Utc::now(),
        }
    }
}

impl UsageStats {
    /// Bump the counter for a recorded activity.
    ///
    /// Login has no dedicated counter; the call is a no-op and returns false.
    pub fn increment(&mut self, category: ActivityCategory, now: DateTime<Utc>) -> bool {
        let counter = match category {
            ActivityCategory::Interview => &mut self.interview_sessions,
            ActivityCategory::Chat => &mut self.chatbot_interactions,
            ActivityCategory::Resume => &mut self.resumes_created,
            ActivityCategory::Login => return false,
        };

        *counter += 1;
        self.last_updated = now;
        true
    }

    /// Add newly credited practice minutes.
    pub fn add_practice_minutes(&mut self, minutes: u32, now: DateTime<Utc>) {
        if minutes == 0 {
            return;
        }
        self.total_practice_minutes += minutes;
        self.last_updated = now;
    }

    /// Current value of a metric.
    pub fn metric(&self, metric: StatMetric) -> u32 {
        match metric {
            StatMetric::InterviewSessions => self.interview_sessions,
            StatMetric::ChatbotInteractions => self.chatbot_interactions,
            StatMetric::ResumesCreated => self.resumes_created,
            StatMetric::PracticeMinutes => self.total_practice_minutes,
        }
    }
}
