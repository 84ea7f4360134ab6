//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BarbershopError`] via `#[from]`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::appointment::AppointmentStatus;
use crate::id::{AppointmentId, BarberId};

/// Top-level error returned by domain validation and application services.
#[derive(Debug, thiserror::Error)]
pub enum BarbershopError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("booking conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant or input rule was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("client name must not be empty")]
    EmptyClientName,

    #[error("client email must not be empty")]
    EmptyClientEmail,

    #[error("client phone must not be empty")]
    EmptyClientPhone,

    #[error("price must be a finite, non-negative amount")]
    InvalidPrice,

    #[error("duration must be at least one minute")]
    ZeroDuration,

    #[error("opening time {open} must be before closing time {close}")]
    InvalidBusinessHours { open: NaiveTime, close: NaiveTime },

    #[error("slot length must be at least one minute")]
    ZeroSlotLength,

    #[error("{time} is outside business hours")]
    OutsideBusinessHours { time: NaiveTime },

    #[error("{time} does not start a bookable slot")]
    MisalignedSlot { time: NaiveTime },

    #[error("cannot book {date}: the day has already passed")]
    InPast { date: NaiveDate },

    #[error("invalid date `{input}`, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDate { input: String },
}

/// A referenced record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The requested change collides with the current state of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("barber `{barber_id}` is already booked at {date}")]
    SlotTaken {
        barber_id: BarberId,
        date: NaiveDateTime,
    },

    #[error("appointment `{id}` cannot move from {from} to {to}")]
    InvalidTransition {
        id: AppointmentId,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}
