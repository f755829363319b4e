//! Port contracts for reminder scheduling.
//!
//! Ports define the host-provided capabilities the scheduler drives.

pub mod timer;

pub use timer::{ReminderPayload, TimerFacility, TimerFacilityError, TimerFacilityResult};

#[cfg(test)]
pub use timer::MockTimerFacility;
