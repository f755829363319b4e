//! Port contracts for task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
