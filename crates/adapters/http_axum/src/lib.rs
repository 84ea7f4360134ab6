//! # barbershop-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the presentation collaborators
//!   (`/api/barbers`, `/api/services`, `/api/appointments`, …)
//! - Stream appointment events to the barber panel over **SSE**
//!   (`/api/events/stream`)
//! - Map HTTP requests into scheduling service calls (driving adapter)
//! - Map service results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `barbershop-app` (for port traits and services) and
//! `barbershop-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
