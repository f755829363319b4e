//! Task storage and lifecycle for Tickler.
//!
//! This module owns the persisted task records and everything that mutates
//! them: creating, patching, completing, and deleting tasks, plus the query
//! façade the presentation layer consumes. Every mutation is sequenced with
//! the reminder scheduler so that the store and the pending-trigger table
//! can never disagree about a task. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
