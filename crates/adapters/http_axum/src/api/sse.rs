//! Server-Sent Events (SSE) stream of appointment changes.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};

use crate::state::AppState;

/// `GET /api/events/stream` — SSE stream of appointment events.
///
/// Subscribes to the event bus and sends each
/// [`AppointmentEvent`](barbershop_domain::event::AppointmentEvent) as a
/// JSON `data:` frame whose SSE event name is the event type. The stream
/// continues until the client disconnects or the bus is closed.
pub async fn stream<C, R, P>(
    State(state): State<AppState<C, R, P>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match Event::default()
            .event(event.event_type.as_str())
            .json_data(&event)
        {
            Ok(frame) => Some(Ok(frame)),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize appointment event for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some events were dropped");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
