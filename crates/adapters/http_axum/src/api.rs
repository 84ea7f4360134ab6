//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod appointments;
#[allow(clippy::missing_errors_doc)]
pub mod barbers;
#[allow(clippy::missing_errors_doc)]
pub mod services;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C, R, P>() -> Router<AppState<C, R, P>>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        // Barbers
        .route("/barbers", get(barbers::list::<C, R, P>))
        .route("/barbers/{id}", get(barbers::get::<C, R, P>))
        .route("/barbers/{id}/slots", get(barbers::slots::<C, R, P>))
        .route(
            "/barbers/{id}/appointments",
            get(barbers::appointments::<C, R, P>),
        )
        // Services
        .route("/services", get(services::list::<C, R, P>))
        .route("/services/{id}", get(services::get::<C, R, P>))
        // Appointments
        .route("/appointments", post(appointments::book::<C, R, P>))
        .route(
            "/appointments/{id}",
            get(appointments::get::<C, R, P>).patch(appointments::update::<C, R, P>),
        )
        .route(
            "/appointments/{id}/confirm",
            post(appointments::confirm::<C, R, P>),
        )
        .route(
            "/appointments/{id}/cancel",
            post(appointments::cancel::<C, R, P>),
        )
        .route(
            "/appointments/{id}/complete",
            post(appointments::complete::<C, R, P>),
        )
        // Events
        .route("/events/stream", get(sse::stream::<C, R, P>))
}
