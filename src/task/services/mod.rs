//! Application services for task mutation and querying.

mod lifecycle;
mod query;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use query::{TaskQueryService, TaskSelection};
