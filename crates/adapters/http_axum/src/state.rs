//! Shared application state for axum handlers.

use std::sync::Arc;

use barbershop_app::event_bus::InProcessEventBus;
use barbershop_app::ports::{AppointmentRepository, CatalogRepository, EventPublisher};
use barbershop_app::services::scheduling_service::SchedulingService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog, the appointment store and the event publisher
/// to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone`; only the `Arc`
/// wrappers are cloned.
pub struct AppState<C, R, P> {
    /// Scheduling service behind every API endpoint.
    pub scheduling: Arc<SchedulingService<C, R, P>>,
    /// Event bus the SSE stream subscribes to.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<C, R, P> Clone for AppState<C, R, P> {
    fn clone(&self) -> Self {
        Self {
            scheduling: Arc::clone(&self.scheduling),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<C, R, P> AppState<C, R, P>
where
    C: CatalogRepository + Send + Sync + 'static,
    R: AppointmentRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// `event_bus` should be the bus the service publishes to, so that
    /// stream subscribers see the service's events.
    pub fn new(scheduling: SchedulingService<C, R, P>, event_bus: Arc<InProcessEventBus>) -> Self {
        Self {
            scheduling: Arc::new(scheduling),
            event_bus,
        }
    }
}
