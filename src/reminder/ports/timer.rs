//! Timer-facility port for one-shot reminder registration.

use crate::task::domain::TaskId;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for timer facility operations.
pub type TimerFacilityResult<T> = Result<T, TimerFacilityError>;

/// Task identity delivered to the notification renderer at fire time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPayload {
    id: TaskId,
    title: String,
}

impl ReminderPayload {
    /// Creates a payload for the given task identity.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// One-shot trigger capability provided by the host environment.
///
/// Registrations are keyed by task id: registering under an existing key
/// replaces the pending trigger, and cancelling an unknown key is a no-op.
/// Both calls are synchronous fire-and-forget registrations; the facility
/// consumes a registration when it fires and hands the payload to the
/// host's notification renderer.
#[cfg_attr(test, mockall::automock)]
pub trait TimerFacility: Send + Sync {
    /// Registers a trigger that delivers `payload` at `trigger_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TimerFacilityError`] when the host rejects the
    /// registration.
    fn register_one_shot(
        &self,
        key: TaskId,
        trigger_at: DateTime<Local>,
        payload: ReminderPayload,
    ) -> TimerFacilityResult<()>;

    /// Cancels the trigger registered under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TimerFacilityError`] when the host rejects the
    /// cancellation. An unknown key is not an error.
    fn cancel(&self, key: TaskId) -> TimerFacilityResult<()>;
}

/// Errors returned by timer facility implementations.
#[derive(Debug, Clone, Error)]
pub enum TimerFacilityError {
    /// Host-facility failure.
    #[error("timer facility error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TimerFacilityError {
    /// Wraps a host-facility error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
