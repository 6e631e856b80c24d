//! Bounded, time-ordered user notification feed.

pub mod feed;

pub use feed::{Notification, NotificationFeed, NotificationKind, FEED_CAPACITY};
