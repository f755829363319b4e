//! Application services for reminder scheduling.

mod scheduler;

pub use scheduler::{ArmOutcome, ReminderError, ReminderScheduler};
