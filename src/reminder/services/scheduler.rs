//! Scheduler keeping one pending reminder registration per task.

use crate::reminder::domain::{DueTimeFormatError, ReminderPolicy, resolve_trigger};
use crate::reminder::ports::{ReminderPayload, TimerFacility, TimerFacilityError};
use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Local};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while arming or disarming reminders.
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    /// The task's due time is not a valid `HH:MM` string.
    #[error(transparent)]
    Format(#[from] DueTimeFormatError),

    /// The host timer facility rejected a registration or cancellation.
    #[error(transparent)]
    Facility(#[from] TimerFacilityError),
}

/// Result of an [`ReminderScheduler::arm`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmOutcome {
    /// A trigger was registered for the given instant.
    Armed(DateTime<Local>),
    /// The task is not eligible for a reminder; any previous registration
    /// was cancelled.
    Disarmed,
}

/// Reminder scheduler over a host timer facility.
///
/// Tracks an `Unarmed`/`Armed(trigger)` state per task id and keeps the
/// facility holding at most one registration per id by cancelling before
/// every registration. Same-id calls are expected to be serialized by the
/// host's single control thread.
#[derive(Clone)]
pub struct ReminderScheduler<T, C>
where
    T: TimerFacility,
    C: Clock + Send + Sync,
{
    facility: Arc<T>,
    clock: Arc<C>,
    policy: ReminderPolicy,
    armed: Arc<RwLock<HashMap<TaskId, DateTime<Local>>>>,
}

impl<T, C> ReminderScheduler<T, C>
where
    T: TimerFacility,
    C: Clock + Send + Sync,
{
    /// Creates a scheduler over the given facility, clock, and policy.
    #[must_use]
    pub fn new(facility: Arc<T>, clock: Arc<C>, policy: ReminderPolicy) -> Self {
        Self {
            facility,
            clock,
            policy,
            armed: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the configured reminder policy.
    #[must_use]
    pub const fn policy(&self) -> ReminderPolicy {
        self.policy
    }

    /// Re-evaluates the reminder for `task`.
    ///
    /// A completed task, or one without a due time, is disarmed. Otherwise
    /// the next trigger instant is resolved and registered under the task
    /// id, replacing any previous registration so duplicate triggers cannot
    /// coexist.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Format`] for a malformed due time (no
    /// scheduler state is touched) and [`ReminderError::Facility`] when the
    /// host rejects the registration.
    pub fn arm(&self, task: &Task) -> Result<ArmOutcome, ReminderError> {
        let due_time = match task.due_time() {
            Some(value) if !task.completed() => value,
            _ => {
                self.disarm(task.id())?;
                return Ok(ArmOutcome::Disarmed);
            }
        };

        let trigger_at = resolve_trigger(due_time, self.clock.local(), self.policy.lead())?;
        self.facility.cancel(task.id())?;
        // The old registration is gone; forget it before attempting the new
        // one so a rejected registration cannot leave a stale armed state.
        self.armed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&task.id());
        self.facility.register_one_shot(
            task.id(),
            trigger_at,
            ReminderPayload::new(task.id(), task.title()),
        )?;
        self.armed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(task.id(), trigger_at);
        debug!(task_id = %task.id(), trigger_at = %trigger_at, "reminder armed");
        Ok(ArmOutcome::Armed(trigger_at))
    }

    /// Cancels any pending registration for `id`.
    ///
    /// Disarming an already-unarmed id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Facility`] when the host rejects the
    /// cancellation.
    pub fn disarm(&self, id: TaskId) -> Result<(), ReminderError> {
        self.facility.cancel(id)?;
        let previous = self
            .armed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if previous.is_some() {
            debug!(task_id = %id, "reminder disarmed");
        }
        Ok(())
    }

    /// Returns the trigger instant the scheduler currently holds armed for
    /// `id`, if any.
    #[must_use]
    pub fn armed_trigger(&self, id: TaskId) -> Option<DateTime<Local>> {
        self.armed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .copied()
    }
}
