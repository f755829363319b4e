//! Reminder scheduling for Tickler.
//!
//! This module turns a task's `HH:MM` due time into the next future trigger
//! instant and keeps the host timer facility holding exactly one pending
//! registration per task id. Delivery itself (notification rendering,
//! sounds, any "currently playing" state) belongs to the host capability
//! behind the timer port; once a trigger fires, the core has no further
//! responsibility. The module follows hexagonal architecture:
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
