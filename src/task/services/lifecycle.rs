//! Service layer sequencing store mutations with reminder scheduling.

use crate::reminder::ports::TimerFacility;
use crate::reminder::services::{ArmOutcome, ReminderError, ReminderScheduler};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// The single place where store writes and scheduler transitions are
/// sequenced, so the store and the pending-trigger table cannot end up
/// mutually inconsistent. A malformed due time never blocks the store
/// mutation: the failure is logged and the task is saved without a
/// reminder.
#[derive(Clone)]
pub struct TaskLifecycleService<R, T, C>
where
    R: TaskRepository,
    T: TimerFacility,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    scheduler: ReminderScheduler<T, C>,
}

impl<R, T, C> TaskLifecycleService<R, T, C>
where
    R: TaskRepository,
    T: TimerFacility,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, scheduler: ReminderScheduler<T, C>) -> Self {
        Self {
            repository,
            scheduler,
        }
    }

    /// Returns the reminder scheduler this service drives.
    #[must_use]
    pub const fn scheduler(&self) -> &ReminderScheduler<T, C> {
        &self.scheduler
    }

    /// Creates a new task and arms its reminder when eligible.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence fails.
    /// Reminder failures are recovered, not propagated.
    pub fn create(&self, draft: &TaskDraft) -> TaskLifecycleResult<Task> {
        let task = self.repository.create(draft)?;
        self.sync_reminder(&task);
        Ok(task)
    }

    /// Applies a partial update to the task with the given id, then re-arms
    /// or disarms its reminder according to the new state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the id is unknown, and
    /// [`TaskLifecycleError::Domain`] when the patch fails validation.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> TaskLifecycleResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch)?;
        self.repository.update(&task)?;
        self.sync_reminder(&task);
        Ok(task)
    }

    /// Toggles the completion flag: completing disarms the reminder,
    /// uncompleting re-arms it when a due time is present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the id is unknown.
    pub fn set_completed(&self, id: TaskId, completed: bool) -> TaskLifecycleResult<Task> {
        self.update(id, TaskPatch::new().completed(completed))
    }

    /// Deletes the task with the given id, cancelling its reminder first.
    ///
    /// Deleting an unknown id is a no-op. A failed cancellation is logged
    /// and never blocks the store delete: a stray trigger firing for a
    /// deleted id is tolerable, a task surviving its own deletion is not.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store delete
    /// fails.
    pub fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        if let Err(err) = self.scheduler.disarm(id) {
            warn!(task_id = %id, error = %err, "reminder cancellation failed, deleting task anyway");
        }
        self.repository.delete(id)?;
        Ok(())
    }

    /// Re-arms reminders for every uncompleted task with a due time,
    /// returning the number of triggers registered.
    ///
    /// Supports host restarts, where pending registrations are lost and
    /// must be rebuilt from the store. Malformed due times are skipped and
    /// logged, not fatal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store read
    /// fails.
    pub fn rearm_all(&self) -> TaskLifecycleResult<usize> {
        let tasks = self.repository.list(TaskQuery::UpcomingReminders)?;
        let armed = tasks
            .iter()
            .filter(|task| self.sync_reminder(task))
            .count();
        Ok(armed)
    }

    /// Brings the scheduler in line with `task`, recovering every reminder
    /// failure. Returns whether a trigger ended up armed.
    fn sync_reminder(&self, task: &Task) -> bool {
        match self.scheduler.arm(task) {
            Ok(ArmOutcome::Armed(_)) => true,
            Ok(ArmOutcome::Disarmed) => false,
            Err(ReminderError::Format(err)) => {
                warn!(task_id = %task.id(), error = %err, "unparseable due time, task saved without a reminder");
                // A stale trigger from a previous due time must not outlive
                // the update that broke the string.
                if let Err(disarm_err) = self.scheduler.disarm(task.id()) {
                    warn!(task_id = %task.id(), error = %disarm_err, "failed to cancel stale reminder");
                }
                false
            }
            Err(ReminderError::Facility(err)) => {
                warn!(task_id = %task.id(), error = %err, "trigger registration failed, task saved without a reminder");
                false
            }
        }
    }
}
