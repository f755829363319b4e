//! Filter façade composing store queries for the presentation layer.

use crate::task::{
    domain::{Category, Task},
    ports::{TaskQuery, TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;

/// UI-selected filter state: an optional category (absent means "ALL") and
/// an uncompleted-only flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSelection {
    category: Option<Category>,
    uncompleted_only: bool,
}

impl TaskSelection {
    /// Selects every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the selection to one category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts the selection to uncompleted tasks.
    #[must_use]
    pub const fn uncompleted_only(mut self) -> Self {
        self.uncompleted_only = true;
        self
    }
}

/// Stateless query façade over a task repository.
///
/// Pure composition: each call maps the selection onto one store query and
/// returns the fresh result. No caching, no incremental diffing — callers
/// re-run the selection after every mutation.
#[derive(Clone)]
pub struct TaskQueryService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository,
{
    /// Creates a query façade over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the tasks matching `selection`.
    ///
    /// A category selection keeps the category listing's descending
    /// due-time order even when combined with the uncompleted flag; the
    /// flag is applied as an in-memory filter over the category result.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the underlying query fails.
    pub fn list(&self, selection: TaskSelection) -> TaskRepositoryResult<Vec<Task>> {
        match selection.category {
            None if selection.uncompleted_only => {
                self.repository.list(TaskQuery::ByCompletion(false))
            }
            None => self.repository.list(TaskQuery::All),
            Some(category) => {
                let mut tasks = self.repository.list(TaskQuery::ByCategory(category))?;
                if selection.uncompleted_only {
                    tasks.retain(|task| !task.completed());
                }
                Ok(tasks)
            }
        }
    }
}
