//! Diesel row models for task persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Category label.
    pub category: String,
    /// Optional daily due time as `HH:MM` text.
    pub due_time: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
}

/// Insert model for task records; the id comes from the autoincrement key.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Category label.
    pub category: String,
    /// Optional daily due time as `HH:MM` text.
    pub due_time: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
}

/// Full-row overwrite model for task updates.
///
/// `None` writes NULL rather than skipping the column: the domain has
/// already merged the patch, so every column reflects the intended state.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Category label.
    pub category: String,
    /// Optional daily due time as `HH:MM` text.
    pub due_time: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
}
