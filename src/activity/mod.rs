//! Activity recording: per-category event logs with accruing durations.

pub mod log;
pub mod types;

pub use log::{ActivityLog, DurationTick};
pub use types::{ActivityCategory, ActivityDetails, ActivityRecord, UnknownCategory};
