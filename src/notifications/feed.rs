//! Notification types and feed maintenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum notifications retained in the feed.
pub const FEED_CAPACITY: usize = 20;

/// Default action label attached to a pushed notification.
const DEFAULT_ACTION: &str = "View";

/// Severity/type of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational message
    #[default]
    Info,
    /// Positive outcome (goal completed, achievement unlocked)
    Success,
    /// Something needing attention
    Warning,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "Info"),
            NotificationKind::Success => write!(f, "Success"),
            NotificationKind::Warning => write!(f, "Warning"),
        }
    }
}

/// A user-facing message in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: Uuid,
    /// Severity/type
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// When it was pushed
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen it (one-way false to true)
    pub read: bool,
    /// Ordered action labels offered to the user
    pub actions: Vec<String>,
}

/// Newest-first notification feed, truncated to [`FEED_CAPACITY`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Push a notification with the default action, timestamped now.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Notification {
        self.push_with_actions(kind, title, description, vec![DEFAULT_ACTION.to_string()], now)
    }

    /// Push a notification with explicit action labels.
    ///
    /// The feed is re-sorted newest-first and truncated after every push; a
    /// notification older than the 20 retained entries is dropped on arrival.
    pub fn push_with_actions(
        &mut self,
        kind: NotificationKind,
        title: &str,
        description: &str,
        actions: Vec<String>,
        now: DateTime<Utc>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            timestamp: now,
            read: false,
            actions,
        };

        self.items.push(notification.clone());
        self.items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.items.truncate(FEED_CAPACITY);

        notification
    }

    /// Notifications, newest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Number of notifications in the feed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns false if the id is not present.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    /// Remove one notification. Returns false if the id is not present.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < before
    }
}
