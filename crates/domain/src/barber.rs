//! Barber — a member of staff clients can book with.

use serde::{Deserialize, Serialize};

use crate::error::{BarbershopError, ValidationError};
use crate::id::BarberId;

/// A catalog entry describing one barber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    pub id: BarberId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub specialties: Vec<String>,
}

impl Barber {
    /// Create a builder for constructing a [`Barber`].
    #[must_use]
    pub fn builder() -> BarberBuilder {
        BarberBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), BarbershopError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Barber`].
#[derive(Debug, Default)]
pub struct BarberBuilder {
    id: Option<BarberId>,
    name: Option<String>,
    image: Option<String>,
    description: Option<String>,
    specialties: Vec<String>,
}

impl BarberBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<BarberId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialties.push(specialty.into());
        self
    }

    /// Consume the builder, validate, and return a [`Barber`].
    ///
    /// # Errors
    ///
    /// Returns [`BarbershopError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Barber, BarbershopError> {
        let barber = Barber {
            id: self.id.unwrap_or_else(|| BarberId::new("")),
            name: self.name.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            specialties: self.specialties,
        };
        barber.validate()?;
        Ok(barber)
    }
}
