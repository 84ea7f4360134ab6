//! # barbershop-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatalogRepository` — read-only barbers and services
//!   - `AppointmentRepository` — create, query and replace appointments
//!   - `EventPublisher` — broadcast appointment events
//! - Define the **driving/inbound** use-case service:
//!   - `SchedulingService` — catalogs, slot availability, booking, barber actions
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* storage or IO works
//!
//! ## Dependency rule
//! Depends on `barbershop-domain` only (plus `tokio::sync` for channels and locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
