//! The activity ledger: one object owning a user's snapshot and its store.
//!
//! Every mutation funnels through [`ActivityLedger`], which runs the full
//! pipeline synchronously: record or tick, re-derive stats, refresh goals and
//! achievements, push resulting notifications, then rewrite the whole
//! snapshot. [`SharedLedger`] wraps the ledger in a mutex so host timers that
//! fire in the same tick cannot interleave their read-modify-write cycles.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use uuid::Uuid;

use crate::activity::{ActivityDetails, ActivityRecord, UnknownCategory};
use crate::export::SnapshotExport;
use crate::goals::{Goal, GoalCategory};
use crate::notifications::NotificationKind;
use crate::storage::{SnapshotStore, UserSnapshot};

/// Ledger operation errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A user's activity ledger bound to a snapshot store.
///
/// Storage trouble never surfaces as an error: a failed load falls back to
/// freshly seeded state and a failed save leaves the in-memory snapshot
/// authoritative, both logged as warnings.
pub struct ActivityLedger {
    user_key: String,
    snapshot: UserSnapshot,
    store: Box<dyn SnapshotStore>,
    session_start: DateTime<Utc>,
}

impl ActivityLedger {
    /// Open the ledger for a user, loading their snapshot or seeding one.
    pub fn open(store: Box<dyn SnapshotStore>, user_key: &str) -> Self {
        let now = Utc::now();

        let snapshot = match store.load(user_key) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                tracing::info!(user = user_key, "no snapshot found, seeding first-use data");
                UserSnapshot::seeded(now)
            }
            Err(e) => {
                tracing::warn!(user = user_key, error = %e, "snapshot load failed, continuing in memory");
                UserSnapshot::seeded(now)
            }
        };

        let mut ledger = Self {
            user_key: user_key.to_string(),
            snapshot,
            store,
            session_start: now,
        };
        ledger.persist();
        ledger
    }

    /// The user key this ledger is scoped to.
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// When the current session began.
    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    /// Read access to the current snapshot.
    pub fn snapshot(&self) -> &UserSnapshot {
        &self.snapshot
    }

    /// Record an activity.
    ///
    /// `category` is the raw string from the caller's UI; anything outside
    /// the four known categories is rejected with no mutation, as is a
    /// payload that belongs to a different category.
    pub fn record(
        &mut self,
        category: &str,
        details: ActivityDetails,
    ) -> Result<ActivityRecord, LedgerError> {
        let category = category.parse()?;
        if details.category() != category {
            return Err(LedgerError::ValidationError(format!(
                "details payload is for {} but category is {}",
                details.category(),
                category
            )));
        }

        let now = Utc::now();
        let record = self.snapshot.activities.record(category, details, now);
        self.snapshot.stats.increment(category, now);
        self.refresh(now);
        self.persist();

        Ok(record)
    }

    /// Run the periodic duration pass.
    ///
    /// Returns the practice minutes newly credited this pass.
    pub fn tick_durations(&mut self) -> u32 {
        self.tick_durations_at(Utc::now())
    }

    /// Duration pass against an explicit clock.
    pub fn tick_durations_at(&mut self, now: DateTime<Utc>) -> u32 {
        let tick = self
            .snapshot
            .activities
            .update_durations(self.session_start, now);

        if tick.credited_minutes > 0 {
            self.snapshot
                .stats
                .add_practice_minutes(tick.credited_minutes, now);
            self.refresh(now);
        }

        if tick.updated_records > 0 {
            self.persist();
        }

        tick.credited_minutes
    }

    /// Create a goal, seeded from present-day stats.
    ///
    /// Unrecognized categories are kept verbatim; such a goal is valid but
    /// never progresses on its own.
    pub fn add_goal(
        &mut self,
        title: &str,
        category: &str,
        target: u32,
    ) -> Result<Goal, LedgerError> {
        if target == 0 {
            return Err(LedgerError::ValidationError(
                "goal target must be at least 1".to_string(),
            ));
        }

        let now = Utc::now();
        let goal = self.snapshot.goals.add(
            title,
            GoalCategory::from_input(category),
            target,
            &self.snapshot.stats,
            now,
        );
        self.persist();

        Ok(goal)
    }

    /// Mark one notification read. Returns false if the id is not present.
    pub fn mark_notification_read(&mut self, id: Uuid) -> bool {
        let found = self.snapshot.notifications.mark_read(id);
        if found {
            self.persist();
        }
        found
    }

    /// Mark every notification read.
    pub fn mark_all_notifications_read(&mut self) {
        self.snapshot.notifications.mark_all_read();
        self.persist();
    }

    /// Remove one notification. Returns false if the id is not present.
    pub fn dismiss_notification(&mut self, id: Uuid) -> bool {
        let found = self.snapshot.notifications.dismiss(id);
        if found {
            self.persist();
        }
        found
    }

    /// Replace all user data with freshly seeded state.
    pub fn reset(&mut self) {
        let now = Utc::now();
        tracing::info!(user = %self.user_key, "resetting user data");
        self.snapshot = UserSnapshot::seeded(now);
        self.session_start = now;
        self.persist();
    }

    /// Build the export document for the current snapshot.
    pub fn export(&self) -> SnapshotExport {
        SnapshotExport::from_snapshot(&self.user_key, &self.snapshot, Utc::now())
    }

    /// Re-evaluate goals and achievements against current stats and push
    /// notifications for anything that completed or unlocked.
    fn refresh(&mut self, now: DateTime<Utc>) {
        let completions = self.snapshot.goals.refresh(&self.snapshot.stats, now);
        for done in completions {
            self.snapshot.notifications.push(
                NotificationKind::Success,
                "Goal Completed",
                &format!("You completed \"{}\"", done.title),
                now,
            );
        }

        let unlocks = self.snapshot.achievements.refresh(&self.snapshot.stats, now);
        for unlock in unlocks {
            self.snapshot.notifications.push(
                NotificationKind::Success,
                "Achievement Unlocked",
                &format!("You earned \"{}\"", unlock.name),
                now,
            );
        }
    }

    /// Rewrite the whole snapshot, best effort.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.user_key, &self.snapshot) {
            tracing::warn!(user = %self.user_key, error = %e, "snapshot save failed, keeping in-memory state");
        }
    }
}

/// Clonable, mutex-guarded handle to a ledger.
///
/// Host applications drive the ledger from independent timers (the duration
/// pass, dashboard refreshes) on top of direct user actions. Funneling every
/// call through one lock makes each read-modify-write cycle atomic, so a
/// timer can no longer overwrite a mutation that landed between its load and
/// its save.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<ActivityLedger>>,
}

impl SharedLedger {
    /// Open a shared ledger for a user.
    pub fn open(store: Box<dyn SnapshotStore>, user_key: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActivityLedger::open(store, user_key))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ActivityLedger> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record an activity.
    pub fn record(
        &self,
        category: &str,
        details: ActivityDetails,
    ) -> Result<ActivityRecord, LedgerError> {
        self.lock().record(category, details)
    }

    /// Run the periodic duration pass.
    pub fn tick_durations(&self) -> u32 {
        self.lock().tick_durations()
    }

    /// Create a goal.
    pub fn add_goal(&self, title: &str, category: &str, target: u32) -> Result<Goal, LedgerError> {
        self.lock().add_goal(title, category, target)
    }

    /// Mark one notification read.
    pub fn mark_notification_read(&self, id: Uuid) -> bool {
        self.lock().mark_notification_read(id)
    }

    /// Mark every notification read.
    pub fn mark_all_notifications_read(&self) {
        self.lock().mark_all_notifications_read()
    }

    /// Remove one notification.
    pub fn dismiss_notification(&self, id: Uuid) -> bool {
        self.lock().dismiss_notification(id)
    }

    /// Replace all user data with freshly seeded state.
    pub fn reset(&self) {
        self.lock().reset()
    }

    /// Build the export document for the current snapshot.
    pub fn export(&self) -> SnapshotExport {
        self.lock().export()
    }

    /// Run a closure against the ledger under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&ActivityLedger) -> R) -> R {
        f(&self.lock())
    }
}
