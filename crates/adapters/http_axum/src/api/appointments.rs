//! JSON REST handlers for booking and managing appointments.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};
use barbershop_domain::appointment::{Appointment, AppointmentPatch, NewAppointment};
use barbershop_domain::error::{BarbershopError, NotFoundError};
use barbershop_domain::id::{AppointmentId, BarberId, ServiceId};
use barbershop_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for booking an appointment.
///
/// Blank contact fields are accepted here and rejected by the service so
/// that the client gets a meaningful message.
#[derive(Debug, Deserialize)]
pub struct BookAppointmentRequest {
    pub barber_id: BarberId,
    pub service_id: ServiceId,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    /// `YYYY-MM-DDTHH:MM[:SS]`, local wall-clock time.
    pub date: String,
}

/// Possible responses from the book endpoint.
pub enum BookResponse {
    Created(Json<Appointment>),
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the get, update and lifecycle endpoints.
pub enum AppointmentResponse {
    Ok(Json<Appointment>),
}

impl IntoResponse for AppointmentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/appointments`
pub async fn book<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Json(req): Json<BookAppointmentRequest>,
) -> Result<BookResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let date = time::parse_local_date_time(&req.date)?;
    let appointment = NewAppointment::builder()
        .barber_id(req.barber_id)
        .service_id(req.service_id)
        .client_name(req.client_name)
        .client_email(req.client_email)
        .client_phone(req.client_phone)
        .date(date)
        .build();

    let created = state.scheduling.book_appointment(appointment).await?;
    Ok(BookResponse::Created(Json(created)))
}

/// `GET /api/appointments/{id}`
pub async fn get<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<AppointmentId>,
) -> Result<AppointmentResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let appointment = state.scheduling.get_appointment(&id).await?;
    Ok(AppointmentResponse::Ok(Json(appointment)))
}

/// `PATCH /api/appointments/{id}`
///
/// Shallow-merges the body into the stored appointment. Lifecycle rules are
/// not checked; the action endpoints below enforce them. Moving or
/// reactivating an appointment onto a held slot answers `409`.
pub async fn update<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<AppointmentId>,
    Json(patch): Json<AppointmentPatch>,
) -> Result<AppointmentResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let updated = state
        .scheduling
        .update_appointment(&id, patch)
        .await?
        .ok_or_else(|| {
            BarbershopError::from(NotFoundError {
                entity: "Appointment",
                id: id.to_string(),
            })
        })?;
    Ok(AppointmentResponse::Ok(Json(updated)))
}

/// `POST /api/appointments/{id}/confirm`
pub async fn confirm<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<AppointmentId>,
) -> Result<AppointmentResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let appointment = state.scheduling.confirm_appointment(&id).await?;
    Ok(AppointmentResponse::Ok(Json(appointment)))
}

/// `POST /api/appointments/{id}/cancel`
pub async fn cancel<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<AppointmentId>,
) -> Result<AppointmentResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let appointment = state.scheduling.cancel_appointment(&id).await?;
    Ok(AppointmentResponse::Ok(Json(appointment)))
}

/// `POST /api/appointments/{id}/complete`
pub async fn complete<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<AppointmentId>,
) -> Result<AppointmentResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let appointment = state.scheduling.complete_appointment(&id).await?;
    Ok(AppointmentResponse::Ok(Json(appointment)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::router::tests::{send, test_state};

    fn booking(barber: &str, date: &str) -> serde_json::Value {
        json!({
            "barber_id": barber,
            "service_id": "s1",
            "client_name": "João Paulo",
            "client_email": "joao@email.com",
            "client_phone": "(11) 99999-8888",
            "date": date,
        })
    }

    #[tokio::test]
    async fn should_book_free_slot() {
        let (status, body) = send(
            test_state(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T09:00")),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "a1");
        assert_eq!(body["date"], "2099-06-01T09:00:00");
        assert_eq!(body["confirmed"], false);
        assert_eq!(body["completed"], false);
    }

    #[tokio::test]
    async fn should_reject_second_booking_of_same_slot() {
        let state = test_state();
        let (first, _) = send(
            state.clone(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T10:30:00")),
        )
        .await;
        let (second, body) = send(
            state,
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T10:30")),
        )
        .await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("already booked"));
    }

    #[tokio::test]
    async fn should_reject_blank_client_name() {
        let mut request = booking("b1", "2099-06-01T09:00");
        request["client_name"] = json!("  ");

        let (status, body) = send(test_state(), "POST", "/api/appointments", Some(request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "client name must not be empty");
    }

    #[tokio::test]
    async fn should_reject_unknown_barber_on_booking() {
        let (status, _) = send(
            test_state(),
            "POST",
            "/api/appointments",
            Some(booking("b99", "2099-06-01T09:00")),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_time_outside_business_hours() {
        let (status, _) = send(
            test_state(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T19:00")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_unparseable_booking_date() {
        let (status, _) = send(
            test_state(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "next tuesday")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_patch_only_given_fields() {
        let state = test_state();
        send(
            state.clone(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T09:00")),
        )
        .await;

        let (status, body) = send(
            state,
            "PATCH",
            "/api/appointments/a1",
            Some(json!({ "confirmed": true })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["confirmed"], true);
        assert_eq!(body["client_name"], "João Paulo");
        assert_eq!(body["date"], "2099-06-01T09:00:00");
    }

    #[tokio::test]
    async fn should_patch_date_in_booking_format() {
        let state = test_state();
        send(
            state.clone(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T09:00")),
        )
        .await;

        let (status, body) = send(
            state,
            "PATCH",
            "/api/appointments/a1",
            Some(json!({ "date": "2099-06-01T11:00" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2099-06-01T11:00:00");
    }

    #[tokio::test]
    async fn should_return_409_when_reviving_onto_taken_slot() {
        let state = test_state();
        let slot = booking("b1", "2099-06-01T10:00");
        send(state.clone(), "POST", "/api/appointments", Some(slot.clone())).await;
        send(state.clone(), "POST", "/api/appointments/a1/cancel", None).await;
        send(state.clone(), "POST", "/api/appointments", Some(slot)).await;
        send(state.clone(), "POST", "/api/appointments/a2/confirm", None).await;

        let (status, _) = send(
            state.clone(),
            "PATCH",
            "/api/appointments/a1",
            Some(json!({ "cancelled": false, "confirmed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, body) = send(state, "GET", "/api/appointments/a1", None).await;
        assert_eq!(body["cancelled"], true);
    }

    #[tokio::test]
    async fn should_return_404_when_patching_unknown_appointment() {
        let (status, body) = send(
            test_state(),
            "PATCH",
            "/api/appointments/a404",
            Some(json!({ "confirmed": true })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Appointment `a404` not found");
    }

    #[tokio::test]
    async fn should_walk_lifecycle_through_action_endpoints() {
        let state = test_state();
        send(
            state.clone(),
            "POST",
            "/api/appointments",
            Some(booking("b2", "2099-06-01T14:00")),
        )
        .await;

        let (status, body) =
            send(state.clone(), "POST", "/api/appointments/a1/confirm", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["confirmed"], true);

        let (status, body) =
            send(state.clone(), "POST", "/api/appointments/a1/complete", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completed"], true);

        let (status, _) = send(state, "POST", "/api/appointments/a1/cancel", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_free_slot_after_cancel() {
        let state = test_state();
        send(
            state.clone(),
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T09:00")),
        )
        .await;

        let (status, body) = send(state.clone(), "POST", "/api/appointments/a1/cancel", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cancelled"], true);

        let (status, body) = send(
            state,
            "POST",
            "/api/appointments",
            Some(booking("b1", "2099-06-01T09:00")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "a2");
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_appointment_action() {
        let (status, _) = send(test_state(), "POST", "/api/appointments/a9/confirm", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(test_state(), "GET", "/api/appointments/a9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
