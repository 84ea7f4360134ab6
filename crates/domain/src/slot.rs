//! Business hours and time-slot availability.
//!
//! A slot is a fixed time-of-day boundary inside business hours, independent
//! of any appointment. Availability is computed per `(date, barber)` by a
//! linear scan over that barber's appointments.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::error::ValidationError;
use crate::id::BarberId;

/// Daily opening window and slot granularity.
///
/// `close` is exclusive: the last slot starts one slot length before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBusinessHours")]
pub struct BusinessHours {
    open: NaiveTime,
    close: NaiveTime,
    slot_minutes: u32,
}

/// Unchecked wire shape of [`BusinessHours`].
#[derive(Deserialize)]
struct RawBusinessHours {
    open: NaiveTime,
    close: NaiveTime,
    slot_minutes: u32,
}

impl TryFrom<RawBusinessHours> for BusinessHours {
    type Error = ValidationError;

    fn try_from(raw: RawBusinessHours) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.close, raw.slot_minutes)
    }
}

impl Default for BusinessHours {
    /// 09:00 to 19:00 in 30-minute slots.
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            close: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or(NaiveTime::MIN),
            slot_minutes: 30,
        }
    }
}

impl BusinessHours {
    /// Build business hours after checking that `open < close` and the slot
    /// length is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBusinessHours`] or
    /// [`ValidationError::ZeroSlotLength`].
    pub fn new(
        open: NaiveTime,
        close: NaiveTime,
        slot_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if open >= close {
            return Err(ValidationError::InvalidBusinessHours { open, close });
        }
        if slot_minutes == 0 {
            return Err(ValidationError::ZeroSlotLength);
        }
        Ok(Self {
            open,
            close,
            slot_minutes,
        })
    }

    #[must_use]
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    #[must_use]
    pub fn close(&self) -> NaiveTime {
        self.close
    }

    #[must_use]
    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Every slot start time, in chronological order.
    pub fn slot_starts(&self) -> impl Iterator<Item = NaiveTime> {
        let close = self.close;
        let step = Duration::minutes(i64::from(self.slot_minutes));
        std::iter::successors(Some(self.open), move |current| {
            let (next, wrapped) = current.overflowing_add_signed(step);
            (wrapped == 0 && next > *current).then_some(next)
        })
        .take_while(move |start| *start < close)
    }

    /// Check that `time` is the start of one of the slots.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutsideBusinessHours`] when `time` is
    /// before opening or at/after closing, and
    /// [`ValidationError::MisalignedSlot`] when it falls between two slot
    /// boundaries (seconds included).
    pub fn check_slot_start(&self, time: NaiveTime) -> Result<(), ValidationError> {
        if time < self.open || time >= self.close {
            return Err(ValidationError::OutsideBusinessHours { time });
        }
        let offset = (time - self.open).num_seconds();
        let slot_seconds = i64::from(self.slot_minutes) * 60;
        if offset % slot_seconds != 0 || time.nanosecond() != 0 {
            return Err(ValidationError::MisalignedSlot { time });
        }
        Ok(())
    }
}

/// Availability of one slot for a given barber and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start as `HH:MM` (24-hour).
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    #[must_use]
    pub fn new(start: NaiveTime, available: bool) -> Self {
        Self {
            time: start.format("%H:%M").to_string(),
            available,
        }
    }
}

/// Compute availability of every slot on `date` for `barber_id`.
///
/// A slot is unavailable iff some appointment in `appointments`
/// [occupies](Appointment::occupies) it. Appointments of other barbers or
/// other days are ignored, so callers may pass a broader list.
#[must_use]
pub fn generate_time_slots(
    hours: &BusinessHours,
    appointments: &[Appointment],
    barber_id: &BarberId,
    date: NaiveDate,
) -> Vec<TimeSlot> {
    hours
        .slot_starts()
        .map(|start| {
            let booked = appointments
                .iter()
                .any(|appointment| appointment.occupies(barber_id, date, start));
            TimeSlot::new(start, !booked)
        })
        .collect()
}
