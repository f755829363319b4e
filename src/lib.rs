//! Tickler: task tracking with daily due-time reminders.
//!
//! This crate provides the core of a small to-do system: a persistent task
//! store with filtering contracts, and a reminder engine that computes
//! trigger instants from `HH:MM` due times and keeps exactly one pending
//! reminder registered per task.
//!
//! # Architecture
//!
//! Tickler follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, timers, etc.)
//!
//! # Modules
//!
//! - [`task`]: Persisted task records, query façade, and mutation lifecycle
//! - [`reminder`]: Due-time resolution and one-shot reminder scheduling
//!
//! # Concurrency
//!
//! All store and scheduler operations are designed to run on a single
//! control thread. Every operation is bounded (local I/O or a synchronous
//! registration call); internal locking exists only to satisfy `Send +
//! Sync` sharing, not to serialize concurrent mutation of the same task id.
//! Hosts embedding this crate on multiple threads must serialize arm and
//! disarm calls per task id externally.

pub mod reminder;
pub mod task;
