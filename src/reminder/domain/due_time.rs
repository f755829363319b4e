//! Parsing of `HH:MM` due-time strings.

use super::DueTimeFormatError;
use chrono::NaiveTime;

/// Parses a 24-hour `HH:MM` string into a time of day.
///
/// The value must be exactly two ':'-separated numeric tokens with the hour
/// in `[0, 23]` and the minute in `[0, 59]`. Surrounding whitespace is
/// tolerated.
///
/// # Errors
///
/// Returns [`DueTimeFormatError`] when the token count is wrong, a token is
/// non-numeric, or a value is out of range.
pub fn parse_due_time(value: &str) -> Result<NaiveTime, DueTimeFormatError> {
    let malformed = || DueTimeFormatError::Malformed(value.to_owned());

    let mut tokens = value.trim().split(':');
    let hour_token = tokens.next().ok_or_else(malformed)?;
    let minute_token = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let hour: u32 = hour_token.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_token.parse().map_err(|_| malformed())?;
    if hour > 23 {
        return Err(DueTimeFormatError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(DueTimeFormatError::MinuteOutOfRange(minute));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}
