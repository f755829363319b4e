//! Repository port for task persistence, lookup, and filtered listing.

use crate::task::domain::{Category, Task, TaskDraft, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Filter applied by [`TaskRepository::list`], together with the ordering
/// contract each variant implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskQuery {
    /// Every task, ascending by due time with undated tasks last.
    All,
    /// Tasks in one category, descending by due time.
    ///
    /// The descending order is inherited source behaviour for the category
    /// listing and is preserved for compatibility.
    ByCategory(Category),
    /// Tasks matching a completion flag, ascending by due time with undated
    /// tasks last.
    ByCompletion(bool),
    /// Uncompleted tasks that carry a due time, ascending by due time.
    /// Feeds reminder re-registration sweeps.
    UpcomingReminders,
}

/// Task persistence contract.
///
/// The repository never talks to the reminder scheduler; callers are
/// responsible for re-evaluating triggers after a mutation.
pub trait TaskRepository: Send + Sync {
    /// Persists a new record and returns it with a fresh unique id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Overwrites the record matching `task.id()` with the given state.
    ///
    /// Partial-update merge semantics live in the domain: callers load the
    /// record, apply a patch, and hand the merged task back here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Removes the record with the given identifier.
    ///
    /// Deleting an absent record is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the delete.
    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns the tasks matching `query`, ordered per its contract.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the read.
    fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
