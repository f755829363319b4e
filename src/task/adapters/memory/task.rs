//! In-memory repository for task lifecycle tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    next_id: i64,
}

impl InMemoryTaskState {
    fn fresh_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Orders two optional due times with absent values sorting as greatest.
fn due_time_nulls_greatest(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders two optional due times with absent values sorting as smallest,
/// matching SQLite's NULL collation so that a descending sort still places
/// undated tasks last.
fn due_time_nulls_least(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = state.fresh_id();
        let task = Task::from_persisted(PersistedTaskData {
            id,
            title: draft.title().to_owned(),
            description: draft.description().map(str::to_owned),
            category: draft.category(),
            due_time: draft.due_time().map(str::to_owned),
            completed: draft.completed(),
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.tasks.remove(&id);
        Ok(())
    }

    fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = match query {
            TaskQuery::All => state.tasks.values().cloned().collect(),
            TaskQuery::ByCategory(category) => state
                .tasks
                .values()
                .filter(|task| task.category() == category)
                .cloned()
                .collect(),
            TaskQuery::ByCompletion(completed) => state
                .tasks
                .values()
                .filter(|task| task.completed() == completed)
                .cloned()
                .collect(),
            TaskQuery::UpcomingReminders => state
                .tasks
                .values()
                .filter(|task| !task.completed() && task.due_time().is_some())
                .cloned()
                .collect(),
        };
        match query {
            TaskQuery::ByCategory(_) => {
                tasks.sort_by(|a, b| due_time_nulls_least(b.due_time(), a.due_time()));
            }
            TaskQuery::All | TaskQuery::ByCompletion(_) | TaskQuery::UpcomingReminders => {
                tasks.sort_by(|a, b| due_time_nulls_greatest(a.due_time(), b.due_time()));
            }
        }
        Ok(tasks)
    }
}
