//! Resolution of due times into future trigger instants.

use super::{DueTimeFormatError, parse_due_time};
use chrono::{DateTime, Local, TimeDelta};

/// Configurable reminder lead time.
///
/// The lead is subtracted from the due time to decide when the reminder
/// fires: zero means "at the due time", sixty minutes means "warn one hour
/// before".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    lead: TimeDelta,
}

impl ReminderPolicy {
    /// Fires reminders exactly at the due time.
    #[must_use]
    pub fn at_due_time() -> Self {
        Self {
            lead: TimeDelta::zero(),
        }
    }

    /// Fires reminders one hour before the due time.
    #[must_use]
    pub fn hour_before() -> Self {
        Self::with_lead(TimeDelta::minutes(60))
    }

    /// Fires reminders `lead` ahead of the due time.
    #[must_use]
    pub const fn with_lead(lead: TimeDelta) -> Self {
        Self { lead }
    }

    /// Returns the configured lead offset.
    #[must_use]
    pub const fn lead(self) -> TimeDelta {
        self.lead
    }
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self::at_due_time()
    }
}

/// Computes the next strictly-future trigger instant for a due time.
///
/// The due time is combined with `now`'s calendar date in the local time
/// zone and the lead offset is subtracted. While the candidate is at or
/// before `now` it is advanced by exactly 24 hours, so lead times of a day
/// or more still land in the future. A due time falling into a nonexistent
/// local wall-clock instant (DST spring-forward gap) counts as already
/// passed and rolls forward the same way.
///
/// Deterministic in `(due_time, now, lead)`; no global state is consulted.
///
/// # Errors
///
/// Returns [`DueTimeFormatError`] when `due_time` is not a valid `HH:MM`
/// string.
pub fn resolve_trigger(
    due_time: &str,
    now: DateTime<Local>,
    lead: TimeDelta,
) -> Result<DateTime<Local>, DueTimeFormatError> {
    let time_of_day = parse_due_time(due_time)?;
    let same_day = now.with_time(time_of_day).earliest().unwrap_or(now);
    let mut trigger = same_day - lead;
    while trigger <= now {
        trigger += TimeDelta::hours(24);
    }
    Ok(trigger)
}
