//! Activity record type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Category of a logged user activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// A practice interview session
    Interview,
    /// Resume creation or editing
    Resume,
    /// A chatbot coaching conversation
    Chat,
    /// A sign-in event
    Login,
}

impl ActivityCategory {
    /// All known categories.
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Interview,
        ActivityCategory::Resume,
        ActivityCategory::Chat,
        ActivityCategory::Login,
    ];

    /// Get display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityCategory::Interview => "Interview",
            ActivityCategory::Resume => "Resume",
            ActivityCategory::Chat => "Chat",
            ActivityCategory::Login => "Login",
        }
    }

    /// Whether time spent in this category counts toward practice minutes.
    pub fn accrues_practice_time(&self) -> bool {
        matches!(self, ActivityCategory::Interview | ActivityCategory::Chat)
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when parsing an activity category outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ActivityCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interview" => Ok(ActivityCategory::Interview),
            "resume" => Ok(ActivityCategory::Resume),
            "chat" => Ok(ActivityCategory::Chat),
            "login" => Ok(ActivityCategory::Login),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Category-specific payload carried by an activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActivityDetails {
    /// Practice interview outcome
    Interview {
        /// Overall feedback score (0-100), if graded
        score: Option<u32>,
    },
    /// Resume work
    Resume {
        /// Template the resume was built from
        template: Option<String>,
    },
    /// Chatbot conversation
    Chat {
        /// Messages exchanged in the conversation
        message_count: Option<u32>,
    },
    /// Sign-in (no payload)
    Login,
}

impl ActivityDetails {
    /// The category this payload belongs to.
    pub fn category(&self) -> ActivityCategory {
        match self {
            ActivityDetails::Interview { .. } => ActivityCategory::Interview,
            ActivityDetails::Resume { .. } => ActivityCategory::Resume,
            ActivityDetails::Chat { .. } => ActivityCategory::Chat,
            ActivityDetails::Login => ActivityCategory::Login,
        }
    }

    /// Empty payload for a category.
    pub fn empty_for(category: ActivityCategory) -> Self {
        match category {
            ActivityCategory::Interview => ActivityDetails::Interview { score: None },
            ActivityCategory::Resume => ActivityDetails::Resume { template: None },
            ActivityCategory::Chat => ActivityDetails::Chat { message_count: None },
            ActivityCategory::Login => ActivityDetails::Login,
        }
    }

    /// One-line rendering for exports.
    pub fn summary(&self) -> String {
        match self {
            ActivityDetails::Interview { score: Some(s) } => format!("score={}", s),
            ActivityDetails::Resume { template: Some(t) } => format!("template={}", t),
            ActivityDetails::Chat {
                message_count: Some(n),
            } => format!("messages={}", n),
            _ => String::new(),
        }
    }
}

/// One logged user action with an accruing session duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Category this record belongs to
    pub category: ActivityCategory,
    /// When the activity started
    pub timestamp: DateTime<Utc>,
    /// Whole minutes elapsed since start, as of the last duration pass
    pub duration_minutes: u32,
    /// Category-specific payload
    pub details: ActivityDetails,
}

impl ActivityRecord {
    /// Create a new record starting now with zero accrued duration.
    pub fn new(category: ActivityCategory, details: ActivityDetails, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            timestamp: now,
            duration_minutes: 0,
            details,
        }
    }

    /// Whole minutes of wall clock elapsed since the record started.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        let elapsed = now.signed_duration_since(self.timestamp).num_minutes();
        elapsed.max(0) as u32
    }
}
