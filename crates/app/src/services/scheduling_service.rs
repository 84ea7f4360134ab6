//! Scheduling service — catalogs, slot availability, booking and barber actions.

use chrono::{NaiveDate, Timelike};
use tokio::sync::Mutex;

use barbershop_domain::appointment::{
    Appointment, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use barbershop_domain::barber::Barber;
use barbershop_domain::error::{BarbershopError, ConflictError, NotFoundError, ValidationError};
use barbershop_domain::event::{AppointmentEvent, AppointmentEventType};
use barbershop_domain::id::{AppointmentId, BarberId, ServiceId};
use barbershop_domain::service::Service;
use barbershop_domain::slot::{self, BusinessHours, TimeSlot};
use barbershop_domain::time;

use crate::ports::{AppointmentRepository, CatalogRepository, EventPublisher};

/// Application service owning the schedule.
///
/// Every mutation runs under one booking lock, which makes the
/// availability check and the insert of [`book_appointment`] atomic.
///
/// [`book_appointment`]: SchedulingService::book_appointment
pub struct SchedulingService<C, R, P> {
    catalog: C,
    appointments: R,
    publisher: P,
    hours: BusinessHours,
    booking_lock: Mutex<()>,
}

impl<C, R, P> SchedulingService<C, R, P>
where
    C: CatalogRepository,
    R: AppointmentRepository,
    P: EventPublisher,
{
    /// Create a new service with the default business hours
    /// (09:00–19:00, 30-minute slots).
    pub fn new(catalog: C, appointments: R, publisher: P) -> Self {
        Self {
            catalog,
            appointments,
            publisher,
            hours: BusinessHours::default(),
            booking_lock: Mutex::new(()),
        }
    }

    /// Replace the business hours used for slot generation and booking checks.
    #[must_use]
    pub fn with_business_hours(mut self, hours: BusinessHours) -> Self {
        self.hours = hours;
        self
    }

    /// List every barber, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn list_barbers(&self) -> Result<Vec<Barber>, BarbershopError> {
        self.catalog.barbers().await
    }

    /// List every service, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the catalog.
    pub async fn list_services(&self) -> Result<Vec<Service>, BarbershopError> {
        self.catalog.services().await
    }

    /// Look up a barber by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] when no barber with `id` exists,
    /// or a storage error from the catalog.
    pub async fn get_barber(&self, id: &BarberId) -> Result<Barber, BarbershopError> {
        self.catalog.barber_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Barber",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] when no service with `id` exists,
    /// or a storage error from the catalog.
    pub async fn get_service(&self, id: &ServiceId) -> Result<Service, BarbershopError> {
        self.catalog.service_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Availability of every slot of `date` for `barber_id`, in chronological order.
    ///
    /// Unknown barbers have no appointments, so all their slots are free.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn generate_time_slots(
        &self,
        date: NaiveDate,
        barber_id: &BarberId,
    ) -> Result<Vec<TimeSlot>, BarbershopError> {
        let appointments = self.appointments.find_by_barber_on(barber_id, date).await?;
        Ok(slot::generate_time_slots(
            &self.hours,
            &appointments,
            barber_id,
            date,
        ))
    }

    /// Store a new pending appointment as-is.
    ///
    /// No validation and no collision check is performed; front ends that
    /// want those guarantees use [`book_appointment`](Self::book_appointment).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(
        skip(self, appointment),
        fields(barber_id = %appointment.barber_id, date = %appointment.date)
    )]
    pub async fn add_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, BarbershopError> {
        let _guard = self.booking_lock.lock().await;
        let created = self.appointments.create(appointment).await?;
        tracing::debug!(appointment_id = %created.id, "appointment added");
        self.notify(AppointmentEventType::Booked, &created).await;
        Ok(created)
    }

    /// Check that the requested slot is bookable and free, then store the
    /// appointment, atomically with respect to every other mutation.
    ///
    /// # Errors
    ///
    /// - [`BarbershopError::Validation`] when a contact field is blank, the
    ///   time is not a slot start inside business hours, or the day is past
    /// - [`BarbershopError::NotFound`] when the barber or service is unknown
    /// - [`BarbershopError::Conflict`] when the slot is already taken
    /// - a storage error propagated from the repositories
    #[tracing::instrument(
        skip(self, appointment),
        fields(barber_id = %appointment.barber_id, date = %appointment.date)
    )]
    pub async fn book_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, BarbershopError> {
        appointment.validate()?;
        self.get_barber(&appointment.barber_id).await?;
        self.get_service(&appointment.service_id).await?;

        let day = appointment.date.date();
        let start = appointment.date.time();
        self.hours.check_slot_start(start)?;
        if day < time::today() {
            return Err(ValidationError::InPast { date: day }.into());
        }

        let _guard = self.booking_lock.lock().await;
        let taken = self
            .appointments
            .find_by_barber_on(&appointment.barber_id, day)
            .await?
            .iter()
            .any(|existing| existing.occupies(&appointment.barber_id, day, start));
        if taken {
            tracing::info!(hour = start.hour(), minute = start.minute(), "slot already taken");
            return Err(ConflictError::SlotTaken {
                barber_id: appointment.barber_id,
                date: appointment.date,
            }
            .into());
        }

        let created = self.appointments.create(appointment).await?;
        tracing::info!(appointment_id = %created.id, "appointment booked");
        self.notify(AppointmentEventType::Booked, &created).await;
        Ok(created)
    }

    /// Look up an appointment by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] when no appointment with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<Appointment, BarbershopError> {
        self.appointments
            .get_by_id(id)
            .await?
            .ok_or_else(|| appointment_not_found(id))
    }

    /// Every appointment of `barber_id`, in creation order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_barber_appointments(
        &self,
        barber_id: &BarberId,
    ) -> Result<Vec<Appointment>, BarbershopError> {
        self.appointments.find_by_barber(barber_id).await
    }

    /// Shallow-merge `patch` into the appointment `id`.
    ///
    /// Returns `Ok(None)` without mutating anything when `id` is unknown.
    /// Lifecycle rules are not enforced here; use the barber actions
    /// ([`confirm_appointment`](Self::confirm_appointment), …) for that.
    /// A patch that moves the appointment or reactivates it must land on a
    /// free slot.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Conflict`] when the patched appointment
    /// would share its slot with another active one, or a storage error
    /// propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_appointment(
        &self,
        id: &AppointmentId,
        patch: AppointmentPatch,
    ) -> Result<Option<Appointment>, BarbershopError> {
        let _guard = self.booking_lock.lock().await;
        let Some(mut appointment) = self.appointments.get_by_id(id).await? else {
            tracing::debug!("appointment not found, nothing updated");
            return Ok(None);
        };

        let touches_slot =
            patch.barber_id.is_some() || patch.date.is_some() || patch.cancelled.is_some();
        appointment.apply(patch);
        if touches_slot && !appointment.cancelled {
            self.ensure_slot_free(&appointment).await?;
        }
        let updated = self.appointments.update(appointment).await?;
        if let Some(updated) = &updated {
            self.notify(AppointmentEventType::Updated, updated).await;
        }
        Ok(updated)
    }

    /// Confirm a pending appointment.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] for unknown ids,
    /// [`BarbershopError::Conflict`] when the appointment is not pending,
    /// or a storage error from the repository.
    pub async fn confirm_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<Appointment, BarbershopError> {
        self.transition(id, AppointmentStatus::Confirmed).await
    }

    /// Cancel a pending or confirmed appointment, freeing its slot.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] for unknown ids,
    /// [`BarbershopError::Conflict`] when the appointment is already
    /// cancelled or completed, or a storage error from the repository.
    pub async fn cancel_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<Appointment, BarbershopError> {
        self.transition(id, AppointmentStatus::Cancelled).await
    }

    /// Mark a confirmed appointment as done.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::NotFound`] for unknown ids,
    /// [`BarbershopError::Conflict`] when the appointment is not confirmed,
    /// or a storage error from the repository.
    pub async fn complete_appointment(
        &self,
        id: &AppointmentId,
    ) -> Result<Appointment, BarbershopError> {
        self.transition(id, AppointmentStatus::Completed).await
    }

    async fn ensure_slot_free(&self, appointment: &Appointment) -> Result<(), BarbershopError> {
        let day = appointment.date.date();
        let start = appointment.date.time();
        let taken = self
            .appointments
            .find_by_barber_on(&appointment.barber_id, day)
            .await?
            .iter()
            .filter(|existing| existing.id != appointment.id)
            .any(|existing| existing.occupies(&appointment.barber_id, day, start));
        if taken {
            tracing::info!(hour = start.hour(), minute = start.minute(), "slot already taken");
            return Err(ConflictError::SlotTaken {
                barber_id: appointment.barber_id.clone(),
                date: appointment.date,
            }
            .into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn transition(
        &self,
        id: &AppointmentId,
        next: AppointmentStatus,
    ) -> Result<Appointment, BarbershopError> {
        let _guard = self.booking_lock.lock().await;
        let mut appointment = self
            .appointments
            .get_by_id(id)
            .await?
            .ok_or_else(|| appointment_not_found(id))?;

        appointment.transition_to(next)?;
        let updated = self
            .appointments
            .update(appointment)
            .await?
            .ok_or_else(|| appointment_not_found(id))?;

        let event_type = match next {
            AppointmentStatus::Confirmed => AppointmentEventType::Confirmed,
            AppointmentStatus::Cancelled => AppointmentEventType::Cancelled,
            AppointmentStatus::Completed => AppointmentEventType::Completed,
            AppointmentStatus::Pending => AppointmentEventType::Updated,
        };
        self.notify(event_type, &updated).await;
        Ok(updated)
    }

    async fn notify(&self, event_type: AppointmentEventType, appointment: &Appointment) {
        let event = AppointmentEvent::new(event_type, appointment.clone());
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(
                error = %err,
                appointment_id = %appointment.id,
                "failed to publish appointment event"
            );
        }
    }
}

fn appointment_not_found(id: &AppointmentId) -> BarbershopError {
    NotFoundError {
        entity: "Appointment",
        id: id.to_string(),
    }
    .into()
}
