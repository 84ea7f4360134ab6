//! JSON REST handlers for barbers, their free slots and their schedule.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Deserialize;

use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};
use barbershop_domain::appointment::Appointment;
use barbershop_domain::barber::Barber;
use barbershop_domain::id::BarberId;
use barbershop_domain::slot::TimeSlot;
use barbershop_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters of the slots endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// `YYYY-MM-DD`, or a date-time whose time-of-day is ignored.
    pub date: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Barber>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Barber>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the slots endpoint.
pub enum SlotsResponse {
    Ok(Json<Vec<TimeSlot>>),
}

impl IntoResponse for SlotsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the barber schedule endpoint.
pub enum AppointmentsResponse {
    Ok(Json<Vec<Appointment>>),
}

impl IntoResponse for AppointmentsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/barbers`
pub async fn list<C, R, P>(
    State(state): State<AppState<C, R, P>>,
) -> Result<ListResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let barbers = state.scheduling.list_barbers().await?;
    Ok(ListResponse::Ok(Json(barbers)))
}

/// `GET /api/barbers/{id}`
pub async fn get<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<BarberId>,
) -> Result<GetResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let barber = state.scheduling.get_barber(&id).await?;
    Ok(GetResponse::Ok(Json(barber)))
}

/// `GET /api/barbers/{id}/slots?date=YYYY-MM-DD`
///
/// Unknown barbers get a fully available day, like the service itself.
pub async fn slots<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<BarberId>,
    Query(query): Query<SlotsQuery>,
) -> Result<SlotsResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let date: NaiveDate = time::parse_calendar_date(&query.date)?;
    let slots = state.scheduling.generate_time_slots(date, &id).await?;
    Ok(SlotsResponse::Ok(Json(slots)))
}

/// `GET /api/barbers/{id}/appointments`
pub async fn appointments<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<BarberId>,
) -> Result<AppointmentsResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let appointments = state.scheduling.get_barber_appointments(&id).await?;
    Ok(AppointmentsResponse::Ok(Json(appointments)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use barbershop_domain::appointment::NewAppointment;
    use chrono::NaiveDate;

    use crate::router::tests::{send, test_state};

    fn at(day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn walk_in(barber: &str, day: u32, hour: u32) -> NewAppointment {
        NewAppointment::builder()
            .barber_id(barber)
            .service_id("s1")
            .client_name("Walk-in")
            .client_email("walkin@email.com")
            .client_phone("555")
            .date(at(day, hour, 0))
            .build()
    }

    #[tokio::test]
    async fn should_list_barbers_in_catalog_order() {
        let (status, body) = send(test_state(), "GET", "/api/barbers", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Carlos Silva", "André Santos", "Marcos Oliveira"]);
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_barber() {
        let (status, body) = send(test_state(), "GET", "/api/barbers/b99", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Barber `b99` not found");
    }

    #[tokio::test]
    async fn should_return_twenty_free_slots_for_empty_day() {
        let (status, body) = send(
            test_state(),
            "GET",
            "/api/barbers/b1/slots?date=2025-06-01",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let slots = body.as_array().unwrap();
        assert_eq!(slots.len(), 20);
        assert_eq!(slots[0]["time"], "09:00");
        assert_eq!(slots[19]["time"], "18:30");
        assert!(slots.iter().all(|s| s["available"] == true));
    }

    #[tokio::test]
    async fn should_mark_booked_slot_unavailable() {
        let state = test_state();
        state
            .scheduling
            .add_appointment(walk_in("b1", 1, 9))
            .await
            .unwrap();

        let (_, body) = send(
            state,
            "GET",
            "/api/barbers/b1/slots?date=2025-06-01T15:45:00",
            None,
        )
        .await;

        let slots = body.as_array().unwrap();
        assert_eq!(slots[0]["available"], false);
        assert!(slots[1..].iter().all(|s| s["available"] == true));
    }

    #[tokio::test]
    async fn should_reject_unparseable_slot_date() {
        let (status, body) = send(
            test_state(),
            "GET",
            "/api/barbers/b1/slots?date=someday",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("someday"));
    }

    #[tokio::test]
    async fn should_list_only_appointments_of_requested_barber() {
        let state = test_state();
        state
            .scheduling
            .add_appointment(walk_in("b1", 1, 9))
            .await
            .unwrap();
        state
            .scheduling
            .add_appointment(walk_in("b2", 1, 9))
            .await
            .unwrap();
        state
            .scheduling
            .add_appointment(walk_in("b1", 2, 10))
            .await
            .unwrap();

        let (status, body) = send(state, "GET", "/api/barbers/b1/appointments", None).await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }
}
