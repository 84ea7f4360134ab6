//! # barbershop-domain
//!
//! Pure domain model for the barbershop scheduler.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, local time
//! - Define the **catalogs**: [`Barber`](barber::Barber)s and the
//!   [`Service`](service::Service)s they perform
//! - Define **Appointments**, their lifecycle status and typed patches
//! - Define **business hours** and the slot-availability algorithm
//! - Define **Events** emitted when the schedule changes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod appointment;
pub mod barber;
pub mod event;
pub mod service;
pub mod slot;
