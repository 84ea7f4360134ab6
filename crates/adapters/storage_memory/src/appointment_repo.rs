//! In-memory implementation of [`AppointmentRepository`].

use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use barbershop_app::ports::AppointmentRepository;
use barbershop_domain::appointment::{Appointment, NewAppointment};
use barbershop_domain::error::BarbershopError;
use barbershop_domain::id::{AppointmentId, BarberId};

use crate::error::StorageError;

struct Store {
    next_seq: u64,
    appointments: Vec<Appointment>,
}

/// Process-local appointment store.
///
/// Appointments are kept in creation order. Identifiers are assigned from a
/// monotonic counter (`a1`, `a2`, …) and never reused.
pub struct InMemoryAppointmentRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                next_seq: 1,
                appointments: Vec::new(),
            }),
        }
    }
}

impl InMemoryAppointmentRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `appointments`.
    ///
    /// New identifiers continue after the highest `aN` seen in the seed
    /// (or after the seed length, whichever is larger).
    #[must_use]
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let highest = appointments
            .iter()
            .filter_map(|appointment| appointment.id.sequence())
            .max()
            .unwrap_or_default()
            .max(appointments.len() as u64);
        tracing::debug!(count = appointments.len(), "seeded appointment store");
        Self {
            store: RwLock::new(Store {
                next_seq: highest + 1,
                appointments,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, StorageError> {
        self.store.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, StorageError> {
        self.store.write().map_err(|_| StorageError::Poisoned)
    }

    fn filtered(
        &self,
        predicate: impl Fn(&Appointment) -> bool,
    ) -> Result<Vec<Appointment>, BarbershopError> {
        let store = self.read()?;
        Ok(store
            .appointments
            .iter()
            .filter(|appointment| predicate(appointment))
            .cloned()
            .collect())
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    fn create(
        &self,
        appointment: NewAppointment,
    ) -> impl Future<Output = Result<Appointment, BarbershopError>> + Send {
        let result = self
            .write()
            .map(|mut store| {
                let id = AppointmentId::from_sequence(store.next_seq);
                store.next_seq += 1;
                let created = Appointment::from_new(id, appointment);
                store.appointments.push(created.clone());
                created
            })
            .map_err(BarbershopError::from);
        async move { result }
    }

    fn get_by_id(
        &self,
        id: &AppointmentId,
    ) -> impl Future<Output = Result<Option<Appointment>, BarbershopError>> + Send {
        let result = self
            .filtered(|appointment| appointment.id == *id)
            .map(|found| found.into_iter().next());
        async move { result }
    }

    fn find_by_barber(
        &self,
        barber_id: &BarberId,
    ) -> impl Future<Output = Result<Vec<Appointment>, BarbershopError>> + Send {
        let result = self.filtered(|appointment| appointment.barber_id == *barber_id);
        async move { result }
    }

    fn find_by_barber_on(
        &self,
        barber_id: &BarberId,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Appointment>, BarbershopError>> + Send {
        let result = self.filtered(|appointment| {
            appointment.barber_id == *barber_id && appointment.date.date() == date
        });
        async move { result }
    }

    fn update(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Option<Appointment>, BarbershopError>> + Send {
        let result = self
            .write()
            .map(|mut store| {
                store
                    .appointments
                    .iter_mut()
                    .find(|stored| stored.id == appointment.id)
                    .map(|stored| {
                        *stored = appointment;
                        stored.clone()
                    })
            })
            .map_err(BarbershopError::from);
        async move { result }
    }
}
