//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use barbershop_domain::error::BarbershopError;
use barbershop_domain::event::AppointmentEvent;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<AppointmentEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AppointmentEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(
        &self,
        event: AppointmentEvent,
    ) -> impl Future<Output = Result<(), BarbershopError>> + Send {
        // send only fails when nobody is listening
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbershop_domain::appointment::{Appointment, NewAppointment};
    use barbershop_domain::event::AppointmentEventType;
    use barbershop_domain::id::AppointmentId;

    fn event(seq: u64, event_type: AppointmentEventType) -> AppointmentEvent {
        let appointment = Appointment::from_new(
            AppointmentId::from_sequence(seq),
            NewAppointment::builder().barber_id("b1").service_id("s1").build(),
        );
        AppointmentEvent::new(event_type, appointment)
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(event(1, AppointmentEventType::Booked))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.appointment.id.as_str(), "a1");
        assert_eq!(received.event_type, AppointmentEventType::Booked);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(event(3, AppointmentEventType::Confirmed))
            .await
            .unwrap();

        assert_eq!(rx1.recv().await.unwrap().appointment.id.as_str(), "a3");
        assert_eq!(rx2.recv().await.unwrap().appointment.id.as_str(), "a3");
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        let result = bus.publish(event(1, AppointmentEventType::Updated)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);
        bus.publish(event(1, AppointmentEventType::Booked))
            .await
            .unwrap();

        let mut rx = bus.subscribe();
        bus.publish(event(2, AppointmentEventType::Booked))
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.appointment.id.as_str(), "a2");
    }
}
