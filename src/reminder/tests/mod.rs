//! Unit tests for the reminder module.
//!
//! Tests are organised by concern: pure trigger resolution on one side,
//! scheduler state transitions against timer-facility doubles on the other.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Deterministic clock pinned to a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

/// Builds a local date-time, panicking on invalid components.
pub fn local_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .expect("valid local datetime")
}
