//! Appointment — a client booked with a barber for a service at a date-time.
//!
//! An appointment references its [`Barber`](crate::barber::Barber) and
//! [`Service`](crate::service::Service) by id. Its lifecycle is tracked by
//! three flags (`confirmed`, `completed`, `cancelled`) from which an
//! [`AppointmentStatus`] is derived.

mod patch;
mod status;

pub use patch::AppointmentPatch;
pub use status::AppointmentStatus;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{BarbershopError, ConflictError, ValidationError};
use crate::id::{AppointmentId, BarberId, ServiceId};
use crate::time::LocalDateTime;

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub barber_id: BarberId,
    pub service_id: ServiceId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub date: LocalDateTime,
    pub confirmed: bool,
    pub completed: bool,
    #[serde(default)]
    pub cancelled: bool,
}

impl Appointment {
    /// Materialise a stored appointment from client-supplied fields.
    ///
    /// All lifecycle flags start out `false`.
    #[must_use]
    pub fn from_new(id: AppointmentId, new: NewAppointment) -> Self {
        Self {
            id,
            barber_id: new.barber_id,
            service_id: new.service_id,
            client_name: new.client_name,
            client_email: new.client_email,
            client_phone: new.client_phone,
            date: new.date,
            confirmed: false,
            completed: false,
            cancelled: false,
        }
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> AppointmentStatus {
        if self.completed {
            AppointmentStatus::Completed
        } else if self.cancelled {
            AppointmentStatus::Cancelled
        } else if self.confirmed {
            AppointmentStatus::Confirmed
        } else {
            AppointmentStatus::Pending
        }
    }

    /// Whether this appointment blocks `barber_id`'s slot starting at `time`
    /// on `date`.
    ///
    /// Matches on barber, calendar date, hour and minute. Confirmation is
    /// irrelevant; only explicitly cancelled appointments release the slot.
    #[must_use]
    pub fn occupies(&self, barber_id: &BarberId, date: NaiveDate, time: NaiveTime) -> bool {
        !self.cancelled
            && self.barber_id == *barber_id
            && self.date.date() == date
            && self.date.hour() == time.hour()
            && self.date.minute() == time.minute()
    }

    /// Shallow-overwrite every field set in `patch`.
    pub fn apply(&mut self, patch: AppointmentPatch) {
        let AppointmentPatch {
            barber_id,
            service_id,
            client_name,
            client_email,
            client_phone,
            date,
            confirmed,
            completed,
            cancelled,
        } = patch;

        if let Some(barber_id) = barber_id {
            self.barber_id = barber_id;
        }
        if let Some(service_id) = service_id {
            self.service_id = service_id;
        }
        if let Some(client_name) = client_name {
            self.client_name = client_name;
        }
        if let Some(client_email) = client_email {
            self.client_email = client_email;
        }
        if let Some(client_phone) = client_phone {
            self.client_phone = client_phone;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(confirmed) = confirmed {
            self.confirmed = confirmed;
        }
        if let Some(completed) = completed {
            self.completed = completed;
        }
        if let Some(cancelled) = cancelled {
            self.cancelled = cancelled;
        }
    }

    /// Move the appointment to `next` through a barber action.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::InvalidTransition`] when the lifecycle does
    /// not allow going from the current status to `next`.
    pub fn transition_to(&mut self, next: AppointmentStatus) -> Result<(), ConflictError> {
        let current = self.status();
        if !current.can_transition_to(next) {
            return Err(ConflictError::InvalidTransition {
                id: self.id.clone(),
                from: current,
                to: next,
            });
        }

        match next {
            AppointmentStatus::Confirmed => self.confirmed = true,
            AppointmentStatus::Completed => self.completed = true,
            AppointmentStatus::Cancelled => {
                self.cancelled = true;
                self.confirmed = false;
            }
            AppointmentStatus::Pending => {}
        }
        Ok(())
    }
}

/// Client-supplied fields of an appointment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub barber_id: BarberId,
    pub service_id: ServiceId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub date: LocalDateTime,
}

impl NewAppointment {
    /// Create a builder for constructing a [`NewAppointment`].
    #[must_use]
    pub fn builder() -> NewAppointmentBuilder {
        NewAppointmentBuilder::default()
    }

    /// Check that the client filled in every contact field.
    ///
    /// Format checks (email shape, phone digits) belong to the form layer.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Validation`] when the client name, email
    /// or phone is blank.
    pub fn validate(&self) -> Result<(), BarbershopError> {
        if self.client_name.trim().is_empty() {
            return Err(ValidationError::EmptyClientName.into());
        }
        if self.client_email.trim().is_empty() {
            return Err(ValidationError::EmptyClientEmail.into());
        }
        if self.client_phone.trim().is_empty() {
            return Err(ValidationError::EmptyClientPhone.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewAppointment`].
#[derive(Debug, Default)]
pub struct NewAppointmentBuilder {
    barber_id: Option<BarberId>,
    service_id: Option<ServiceId>,
    client_name: Option<String>,
    client_email: Option<String>,
    client_phone: Option<String>,
    date: Option<LocalDateTime>,
}

impl NewAppointmentBuilder {
    #[must_use]
    pub fn barber_id(mut self, barber_id: impl Into<BarberId>) -> Self {
        self.barber_id = Some(barber_id.into());
        self
    }

    #[must_use]
    pub fn service_id(mut self, service_id: impl Into<ServiceId>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    #[must_use]
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn client_email(mut self, email: impl Into<String>) -> Self {
        self.client_email = Some(email.into());
        self
    }

    #[must_use]
    pub fn client_phone(mut self, phone: impl Into<String>) -> Self {
        self.client_phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: LocalDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Consume the builder and return a [`NewAppointment`].
    ///
    /// Missing fields fall back to empty values; call
    /// [`NewAppointment::validate`] to enforce required fields.
    #[must_use]
    pub fn build(self) -> NewAppointment {
        NewAppointment {
            barber_id: self.barber_id.unwrap_or_else(|| BarberId::new("")),
            service_id: self.service_id.unwrap_or_else(|| ServiceId::new("")),
            client_name: self.client_name.unwrap_or_default(),
            client_email: self.client_email.unwrap_or_default(),
            client_phone: self.client_phone.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> LocalDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn new_appointment() -> NewAppointment {
        NewAppointment::builder()
            .barber_id("b1")
            .service_id("s1")
            .client_name("João Paulo")
            .client_email("joao@email.com")
            .client_phone("(11) 99999-8888")
            .date(at(1, 9, 0))
            .build()
    }

    fn stored() -> Appointment {
        Appointment::from_new(AppointmentId::from_sequence(1), new_appointment())
    }

    #[test]
    fn should_start_pending_with_all_flags_cleared() {
        let appointment = stored();
        assert!(!appointment.confirmed);
        assert!(!appointment.completed);
        assert!(!appointment.cancelled);
        assert_eq!(appointment.status(), AppointmentStatus::Pending);
    }

    #[test]
    fn should_occupy_matching_slot_only() {
        let appointment = stored();
        let b1 = BarberId::from("b1");
        let june_1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        assert!(appointment.occupies(&b1, june_1, hm(9, 0)));
        assert!(!appointment.occupies(&b1, june_1, hm(9, 30)));
        assert!(!appointment.occupies(&BarberId::from("b2"), june_1, hm(9, 0)));
        assert!(!appointment.occupies(&b1, june_1.succ_opt().unwrap(), hm(9, 0)));
    }

    #[test]
    fn should_ignore_seconds_when_matching_slot() {
        let mut appointment = stored();
        appointment.date = at(1, 9, 0).with_second(45).unwrap();
        let june_1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(appointment.occupies(&BarberId::from("b1"), june_1, hm(9, 0)));
    }

    #[test]
    fn should_release_slot_when_cancelled() {
        let mut appointment = stored();
        appointment.transition_to(AppointmentStatus::Cancelled).unwrap();
        let june_1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!appointment.occupies(&BarberId::from("b1"), june_1, hm(9, 0)));
    }

    #[test]
    fn should_keep_slot_when_only_unconfirmed() {
        let mut appointment = stored();
        appointment.apply(AppointmentPatch::confirmed(true));
        appointment.apply(AppointmentPatch::confirmed(false));
        let june_1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(appointment.occupies(&BarberId::from("b1"), june_1, hm(9, 0)));
    }

    #[test]
    fn should_overwrite_only_patched_fields() {
        let mut appointment = stored();
        let before = appointment.clone();

        appointment.apply(AppointmentPatch::confirmed(true));

        assert!(appointment.confirmed);
        assert_eq!(
            Appointment {
                confirmed: false,
                ..appointment
            },
            before
        );
    }

    #[test]
    fn should_overwrite_contact_and_date_fields() {
        let mut appointment = stored();
        appointment.apply(AppointmentPatch {
            client_phone: Some("555-0100".to_string()),
            date: Some(at(2, 10, 30)),
            ..AppointmentPatch::default()
        });

        assert_eq!(appointment.client_phone, "555-0100");
        assert_eq!(appointment.date, at(2, 10, 30));
        assert_eq!(appointment.client_name, "João Paulo");
    }

    #[test]
    fn should_walk_happy_path_lifecycle() {
        let mut appointment = stored();
        appointment.transition_to(AppointmentStatus::Confirmed).unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Confirmed);
        appointment.transition_to(AppointmentStatus::Completed).unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Completed);
    }

    #[test]
    fn should_clear_confirmation_when_cancelled() {
        let mut appointment = stored();
        appointment.transition_to(AppointmentStatus::Confirmed).unwrap();
        appointment.transition_to(AppointmentStatus::Cancelled).unwrap();
        assert!(!appointment.confirmed);
        assert!(appointment.cancelled);
        assert_eq!(appointment.status(), AppointmentStatus::Cancelled);
    }

    #[test]
    fn should_reject_transition_out_of_completed() {
        let mut appointment = stored();
        appointment.transition_to(AppointmentStatus::Confirmed).unwrap();
        appointment.transition_to(AppointmentStatus::Completed).unwrap();

        let result = appointment.transition_to(AppointmentStatus::Cancelled);
        assert_eq!(
            result,
            Err(ConflictError::InvalidTransition {
                id: AppointmentId::from("a1"),
                from: AppointmentStatus::Completed,
                to: AppointmentStatus::Cancelled,
            })
        );
        assert!(!appointment.cancelled);
    }

    #[test]
    fn should_reject_blank_contact_fields() {
        let mut new = new_appointment();
        new.client_email = "   ".to_string();
        assert!(matches!(
            new.validate(),
            Err(BarbershopError::Validation(ValidationError::EmptyClientEmail))
        ));
    }

    #[test]
    fn should_accept_complete_contact_fields() {
        assert!(new_appointment().validate().is_ok());
    }

    #[test]
    fn should_default_cancelled_when_missing_from_json() {
        let json = r#"{
            "id": "a1", "barber_id": "b1", "service_id": "s1",
            "client_name": "João Paulo", "client_email": "joao@email.com",
            "client_phone": "(11) 99999-8888", "date": "2025-05-01T14:00:00",
            "confirmed": true, "completed": false
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(!appointment.cancelled);
        assert_eq!(appointment.status(), AppointmentStatus::Confirmed);
    }
}
