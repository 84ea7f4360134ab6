//! Local wall-clock time helpers.
//!
//! Appointments are scheduled in shop-local time; no timezone conversion is
//! ever applied.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

/// Local date-time of an appointment, event, etc.
pub type LocalDateTime = NaiveDateTime;

/// Return the current local wall-clock time.
#[must_use]
pub fn now() -> LocalDateTime {
    Local::now().naive_local()
}

/// Return today's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    now().date()
}

/// Parse user input into a calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date or a full local date-time
/// (`YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`), in which case the
/// time-of-day is dropped.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the input matches none of
/// the accepted formats.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if let Ok(date) = input.parse::<NaiveDate>() {
        return Ok(date);
    }
    parse_local_date_time(input).map(|date_time| date_time.date())
}

/// Parse user input into a local date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS` (with optional
/// fractional seconds).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the input matches none of
/// the accepted formats.
pub fn parse_local_date_time(input: &str) -> Result<LocalDateTime, ValidationError> {
    let input = input.trim();
    input
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ValidationError::InvalidDate {
            input: input.to_string(),
        })
}

/// Serde helper reading an optional date-time with [`parse_local_date_time`].
pub(crate) fn deserialize_optional_local_date_time<'de, D>(
    deserializer: D,
) -> Result<Option<LocalDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|input| parse_local_date_time(&input).map_err(serde::de::Error::custom))
        .transpose()
}
