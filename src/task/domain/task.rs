//! Task aggregate root, creation drafts, and partial-update patches.

use super::{Category, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The due time is kept as the raw `HH:MM` text the caller supplied. The
/// store deliberately does not validate it: a malformed string is
/// persistable and only surfaces as a format error when a reminder is
/// armed, so a bad due time can never block saving the task itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    category: Category,
    due_time: Option<String>,
    completed: bool,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted category label.
    pub category: Category,
    /// Persisted due time, if any.
    pub due_time: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            category: data.category,
            due_time: data.due_time,
            completed: data.completed,
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

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the category label.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the raw `HH:MM` due time, if any.
    #[must_use]
    pub fn due_time(&self) -> Option<&str> {
        self.due_time.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Applies a partial update, overwriting only the fields the patch
    /// explicitly provides.
    ///
    /// Validation happens before any field is mutated, so a rejected patch
    /// leaves the task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a
    /// title that is empty after trimming.
    pub fn apply(&mut self, patch: TaskPatch) -> Result<(), TaskDomainError> {
        let title = patch.title.map(|value| validate_title(&value)).transpose()?;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.category {
            self.category = value;
        }
        if let Some(value) = patch.due_time {
            self.due_time = value;
        }
        if let Some(value) = patch.completed {
            self.completed = value;
        }
        Ok(())
    }
}

/// Creation payload for a new task record.
///
/// Everything a [`Task`] carries except the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    category: Category,
    due_time: Option<String>,
    completed: bool,
}

impl TaskDraft {
    /// Creates a draft with the required fields; completion defaults false.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>, category: Category) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validate_title(&title.into())?,
            description: None,
            category,
            due_time: None,
            completed: false,
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw `HH:MM` due time.
    #[must_use]
    pub fn with_due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = Some(due_time.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the draft category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the draft due time, if any.
    #[must_use]
    pub fn due_time(&self) -> Option<&str> {
        self.due_time.as_deref()
    }

    /// Returns the draft completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// Partial-update payload for an existing task.
///
/// Unset fields are left untouched by [`Task::apply`]. The due time and
/// description distinguish "leave unchanged" from "clear": use
/// [`TaskPatch::clear_due_time`] / [`TaskPatch::clear_description`] to
/// erase a stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    category: Option<Category>,
    due_time: Option<Option<String>>,
    completed: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title; validated when the patch is applied.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the stored description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets a new category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets a new raw `HH:MM` due time.
    #[must_use]
    pub fn due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = Some(Some(due_time.into()));
        self
    }

    /// Clears the stored due time.
    #[must_use]
    pub fn clear_due_time(mut self) -> Self {
        self.due_time = Some(None);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Trims and validates a task title.
fn validate_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
