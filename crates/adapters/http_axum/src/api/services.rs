//! JSON REST handlers for the service catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};
use barbershop_domain::id::ServiceId;
use barbershop_domain::service::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
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
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services`
pub async fn list<C, R, P>(
    State(state): State<AppState<C, R, P>>,
) -> Result<ListResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let services = state.scheduling.list_services().await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/{id}`
pub async fn get<C, R, P>(
    State(state): State<AppState<C, R, P>>,
    Path(id): Path<ServiceId>,
) -> Result<GetResponse, ApiError>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let service = state.scheduling.get_service(&id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
