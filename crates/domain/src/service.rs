//! Service — something the shop sells (a haircut, a beard trim, …).

use serde::{Deserialize, Serialize};

use crate::error::{BarbershopError, ValidationError};
use crate::id::ServiceId;

/// A catalog entry describing one bookable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub price: f64,
    pub duration_minutes: u32,
    pub description: String,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `price` is negative or not finite ([`ValidationError::InvalidPrice`])
    /// - `duration_minutes` is zero ([`ValidationError::ZeroDuration`])
    pub fn validate(&self) -> Result<(), BarbershopError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice.into());
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::ZeroDuration.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    price: Option<f64>,
    duration_minutes: Option<u32>,
    description: Option<String>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ServiceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Validation`] if any invariant of
    /// [`Service::validate`] fails.
    pub fn build(self) -> Result<Service, BarbershopError> {
        let service = Service {
            id: self.id.unwrap_or_else(|| ServiceId::new("")),
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            duration_minutes: self.duration_minutes.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        service.validate()?;
        Ok(service)
    }
}
