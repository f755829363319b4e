//! In-memory timer facility recording registrations for tests.

use crate::reminder::ports::{ReminderPayload, TimerFacility, TimerFacilityResult};
use crate::task::domain::TaskId;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A recorded one-shot registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Instant the trigger would fire.
    pub trigger_at: DateTime<Local>,
    /// Payload delivered at fire time.
    pub payload: ReminderPayload,
}

/// Thread-safe in-memory timer facility.
///
/// Records registrations in a table keyed by task id, replacing on
/// re-registration and treating unknown-key cancellation as a no-op —
/// the reference behaviour for host facilities.
#[derive(Debug, Clone, Default)]
pub struct RecordingTimerFacility {
    state: Arc<RwLock<HashMap<TaskId, Registration>>>,
}

impl RecordingTimerFacility {
    /// Creates an empty facility.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all pending registrations.
    #[must_use]
    pub fn registrations(&self) -> HashMap<TaskId, Registration> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the pending registration for `key`, if any.
    #[must_use]
    pub fn registration(&self, key: TaskId) -> Option<Registration> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }
}

impl TimerFacility for RecordingTimerFacility {
    fn register_one_shot(
        &self,
        key: TaskId,
        trigger_at: DateTime<Local>,
        payload: ReminderPayload,
    ) -> TimerFacilityResult<()> {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key,
                Registration {
                    trigger_at,
                    payload,
                },
            );
        Ok(())
    }

    fn cancel(&self, key: TaskId) -> TimerFacilityResult<()> {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        Ok(())
    }
}
