//! SQLite repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::todos,
};
use crate::task::{
    domain::{Category, PersistedTaskData, Task, TaskDraft, TaskId},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Mutex;

/// Schema version recorded in `PRAGMA user_version`.
///
/// A stored database with any other version is dropped and recreated; no
/// migration guarantee is made for this store.
const SCHEMA_VERSION: i32 = 1;

const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     title TEXT NOT NULL, \
     description TEXT, \
     category TEXT NOT NULL, \
     due_time TEXT, \
     is_completed INTEGER NOT NULL DEFAULT 0)";

/// SQLite-backed task repository.
///
/// The connection is owned for the lifetime of the repository and closed
/// when it is dropped, giving callers the scoped open/close bracket the
/// store contract requires on every exit path. The store is single-writer;
/// the mutex satisfies `Send + Sync` sharing rather than providing a
/// concurrency model.
pub struct SqliteTaskRepository {
    connection: Mutex<SqliteConnection>,
}

impl std::fmt::Debug for SqliteTaskRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTaskRepository").finish_non_exhaustive()
    }
}

#[derive(QueryableByName)]
struct UserVersionRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    user_version: i32,
}

impl SqliteTaskRepository {
    /// Opens (creating if necessary) the database at `database_path` and
    /// bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the database
    /// cannot be opened or the schema cannot be prepared.
    pub fn open(database_path: &str) -> TaskRepositoryResult<Self> {
        let mut connection =
            SqliteConnection::establish(database_path).map_err(TaskRepositoryError::persistence)?;
        bootstrap_schema(&mut connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Opens a private in-memory database, mainly for tests.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the database
    /// cannot be opened or the schema cannot be prepared.
    pub fn open_in_memory() -> TaskRepositoryResult<Self> {
        Self::open(":memory:")
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T>,
    ) -> TaskRepositoryResult<T> {
        let mut connection = self.connection.lock().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        f(&mut connection)
    }
}

/// Creates the `todos` table, destructively recreating it when the stored
/// schema version does not match [`SCHEMA_VERSION`].
fn bootstrap_schema(connection: &mut SqliteConnection) -> TaskRepositoryResult<()> {
    let stored_version = diesel::sql_query("PRAGMA user_version")
        .get_result::<UserVersionRow>(connection)
        .map_err(TaskRepositoryError::persistence)?
        .user_version;
    if stored_version != SCHEMA_VERSION {
        diesel::sql_query("DROP TABLE IF EXISTS todos")
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
    }
    diesel::sql_query(CREATE_TODOS_TABLE)
        .execute(connection)
        .map_err(TaskRepositoryError::persistence)?;
    diesel::sql_query(format!("PRAGMA user_version = {SCHEMA_VERSION}"))
        .execute(connection)
        .map_err(TaskRepositoryError::persistence)?;
    Ok(())
}

impl TaskRepository for SqliteTaskRepository {
    fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = draft_to_new_row(draft);
        self.with_connection(|connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let changeset = task_to_changeset(task);
        self.with_connection(|connection| {
            let affected = diesel::update(todos::table.find(task.id().value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task.id()));
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.with_connection(|connection| {
            let row = todos::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
    }

    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.with_connection(|connection| {
            diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
    }

    fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        self.with_connection(|connection| {
            let rows = match query {
                TaskQuery::All => todos::table
                    .order((todos::due_time.is_null().asc(), todos::due_time.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                TaskQuery::ByCategory(category) => todos::table
                    .filter(todos::category.eq(category.as_str()))
                    .order(todos::due_time.desc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                TaskQuery::ByCompletion(completed) => todos::table
                    .filter(todos::is_completed.eq(completed))
                    .order((todos::due_time.is_null().asc(), todos::due_time.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                TaskQuery::UpcomingReminders => todos::table
                    .filter(todos::is_completed.eq(false))
                    .filter(todos::due_time.is_not_null())
                    .order(todos::due_time.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
    }
}

fn draft_to_new_row(draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        title: draft.title().to_owned(),
        description: draft.description().map(str::to_owned),
        category: draft.category().as_str().to_owned(),
        due_time: draft.due_time().map(str::to_owned),
        is_completed: draft.completed(),
    }
}

fn task_to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        category: task.category().as_str().to_owned(),
        due_time: task.due_time().map(str::to_owned),
        is_completed: task.completed(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        category: persisted_category,
        due_time,
        is_completed,
    } = row;

    let category = Category::try_from(persisted_category.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        category,
        due_time,
        completed: is_completed,
    }))
}
