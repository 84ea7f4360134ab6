//! Fixed barber and service catalogs held in memory.

use std::future::Future;

use barbershop_app::ports::CatalogRepository;
use barbershop_domain::barber::Barber;
use barbershop_domain::error::BarbershopError;
use barbershop_domain::id::{BarberId, ServiceId};
use barbershop_domain::service::Service;

use crate::seed;

/// Immutable catalog of barbers and services.
///
/// The lists are fixed at construction; lookups scan them in order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    barbers: Vec<Barber>,
    services: Vec<Service>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(barbers: Vec<Barber>, services: Vec<Service>) -> Self {
        Self { barbers, services }
    }

    /// Catalog of the demo shop (three barbers, five services).
    #[must_use]
    pub fn sample() -> Self {
        Self::new(seed::sample_barbers(), seed::sample_services())
    }
}

impl CatalogRepository for StaticCatalog {
    fn barbers(&self) -> impl Future<Output = Result<Vec<Barber>, BarbershopError>> + Send {
        let barbers = self.barbers.clone();
        async move { Ok(barbers) }
    }

    fn services(&self) -> impl Future<Output = Result<Vec<Service>, BarbershopError>> + Send {
        let services = self.services.clone();
        async move { Ok(services) }
    }

    fn barber_by_id(
        &self,
        id: &BarberId,
    ) -> impl Future<Output = Result<Option<Barber>, BarbershopError>> + Send {
        let found = self.barbers.iter().find(|barber| barber.id == *id).cloned();
        async move { Ok(found) }
    }

    fn service_by_id(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, BarbershopError>> + Send {
        let found = self.services.iter().find(|service| service.id == *id).cloned();
        async move { Ok(found) }
    }
}
