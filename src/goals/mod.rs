//! Goal tracking: target/current counters tied to usage stats.

pub mod tracker;
pub mod types;

pub use tracker::{GoalBook, GoalCompleted};
pub use types::{Goal, GoalCategory};
