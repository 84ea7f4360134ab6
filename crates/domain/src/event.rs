//! Appointment events — records of changes to the schedule.

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::time::LocalDateTime;

/// Kind of change that happened to an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentEventType {
    Booked,
    Updated,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentEventType {
    /// Stable lowercase name, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Updated => "updated",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

/// Snapshot of an appointment right after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEvent {
    pub event_type: AppointmentEventType,
    pub appointment: Appointment,
    pub occurred_at: LocalDateTime,
}

impl AppointmentEvent {
    /// Record `event_type` for `appointment`, stamped with the current local time.
    #[must_use]
    pub fn new(event_type: AppointmentEventType, appointment: Appointment) -> Self {
        Self {
            event_type,
            appointment,
            occurred_at: crate::time::now(),
        }
    }
}
