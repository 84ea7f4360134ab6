//! Event bus port — publish/subscribe for appointment events.

use std::future::Future;

use barbershop_domain::error::BarbershopError;
use barbershop_domain::event::AppointmentEvent;

/// Publishes appointment events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(
        &self,
        event: AppointmentEvent,
    ) -> impl Future<Output = Result<(), BarbershopError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: AppointmentEvent,
    ) -> impl Future<Output = Result<(), BarbershopError>> + Send {
        (**self).publish(event)
    }
}
