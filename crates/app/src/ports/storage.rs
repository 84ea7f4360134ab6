//! Storage ports — read-only catalogs and the appointment store.

use std::future::Future;

use chrono::NaiveDate;

use barbershop_domain::appointment::{Appointment, NewAppointment};
use barbershop_domain::barber::Barber;
use barbershop_domain::error::BarbershopError;
use barbershop_domain::id::{AppointmentId, BarberId, ServiceId};
use barbershop_domain::service::Service;

/// Read-only access to the barber and service catalogs.
///
/// Implementations must preserve insertion order in the list methods.
pub trait CatalogRepository {
    /// All barbers, in catalog order.
    fn barbers(&self) -> impl Future<Output = Result<Vec<Barber>, BarbershopError>> + Send;

    /// All services, in catalog order.
    fn services(&self) -> impl Future<Output = Result<Vec<Service>, BarbershopError>> + Send;

    /// Look up a barber by id.
    fn barber_by_id(
        &self,
        id: &BarberId,
    ) -> impl Future<Output = Result<Option<Barber>, BarbershopError>> + Send;

    /// Look up a service by id.
    fn service_by_id(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, BarbershopError>> + Send;
}

/// Repository for storing and querying [`Appointment`]s.
///
/// Implementations must return appointments in creation order.
pub trait AppointmentRepository {
    /// Store a new appointment, assigning the next identifier in sequence.
    fn create(
        &self,
        appointment: NewAppointment,
    ) -> impl Future<Output = Result<Appointment, BarbershopError>> + Send;

    /// Get an appointment by its identifier.
    fn get_by_id(
        &self,
        id: &AppointmentId,
    ) -> impl Future<Output = Result<Option<Appointment>, BarbershopError>> + Send;

    /// Get every appointment of one barber.
    fn find_by_barber(
        &self,
        barber_id: &BarberId,
    ) -> impl Future<Output = Result<Vec<Appointment>, BarbershopError>> + Send;

    /// Get one barber's appointments falling on a calendar date.
    fn find_by_barber_on(
        &self,
        barber_id: &BarberId,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Appointment>, BarbershopError>> + Send;

    /// Replace a stored appointment with `appointment` (matched by id).
    ///
    /// Returns `None` when no appointment with that id is stored.
    fn update(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Option<Appointment>, BarbershopError>> + Send;
}
