//! Per-category activity lists and the session duration pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ActivityCategory, ActivityDetails, ActivityRecord};

/// Append-only activity lists, one per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Practice interview sessions
    #[serde(default)]
    pub interviews: Vec<ActivityRecord>,
    /// Resume work
    #[serde(default)]
    pub resumes: Vec<ActivityRecord>,
    /// Chatbot conversations
    #[serde(default)]
    pub chats: Vec<ActivityRecord>,
    /// Sign-in events
    #[serde(default)]
    pub logins: Vec<ActivityRecord>,
}

/// Outcome of one duration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationTick {
    /// Records whose stored duration grew this pass
    pub updated_records: usize,
    /// Newly credited practice minutes (interview/chat records only)
    pub credited_minutes: u32,
}

impl ActivityLog {
    /// Append a new record for the given category, starting now.
    ///
    /// Returns a copy of the stored record.
    pub fn record(
        &mut self,
        category: ActivityCategory,
        details: ActivityDetails,
        now: DateTime<Utc>,
    ) -> ActivityRecord {
        let record = ActivityRecord::new(category, details, now);
        self.records_mut(category).push(record.clone());
        record
    }

    /// Records for one category, oldest first.
    pub fn records(&self, category: ActivityCategory) -> &[ActivityRecord] {
        match category {
            ActivityCategory::Interview => &self.interviews,
            ActivityCategory::Resume => &self.resumes,
            ActivityCategory::Chat => &self.chats,
            ActivityCategory::Login => &self.logins,
        }
    }

    fn records_mut(&mut self, category: ActivityCategory) -> &mut Vec<ActivityRecord> {
        match category {
            ActivityCategory::Interview => &mut self.interviews,
            ActivityCategory::Resume => &mut self.resumes,
            ActivityCategory::Chat => &mut self.chats,
            ActivityCategory::Login => &mut self.logins,
        }
    }

    /// All records across categories, grouped by category.
    pub fn iter_all(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.interviews
            .iter()
            .chain(self.resumes.iter())
            .chain(self.chats.iter())
            .chain(self.logins.iter())
    }

    /// Total record count across all categories.
    pub fn total_count(&self) -> usize {
        self.interviews.len() + self.resumes.len() + self.chats.len() + self.logins.len()
    }

    /// Recompute durations for records in the current session window.
    ///
    /// Each record created at or after `session_start` has its stored duration
    /// raised to the whole minutes of wall clock elapsed since its creation.
    /// The credit is the delta against the previously stored value, so running
    /// the pass twice without time advancing credits nothing, and a pass that
    /// was skipped for a while catches up to exactly the wall clock gap.
    /// Only interview and chat records contribute to `credited_minutes`.
    pub fn update_durations(
        &mut self,
        session_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DurationTick {
        let mut tick = DurationTick::default();

        for category in ActivityCategory::ALL {
            let credits = category.accrues_practice_time();
            for record in self.records_mut(category) {
                if record.timestamp < session_start {
                    continue;
                }

                let elapsed = record.elapsed_minutes(now);
                if elapsed > record.duration_minutes {
                    let delta = elapsed - record.duration_minutes;
                    record.duration_minutes = elapsed;
                    tick.updated_records += 1;
                    if credits {
                        tick.credited_minutes += delta;
                    }
                }
            }
        }

        tick
    }
}
