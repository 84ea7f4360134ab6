//! # barbershop-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the storage port traits defined in `barbershop-app::ports::storage`
//! - Keep appointments in creation order and assign monotonic `aN` identifiers
//! - Serve the read-only barber and service catalogs
//! - Provide the sample catalog and appointments used by the demo daemon
//!
//! ## Dependency rule
//! Depends on `barbershop-app` (for port traits) and `barbershop-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod appointment_repo;
pub mod catalog;
pub mod error;
pub mod seed;

pub use appointment_repo::InMemoryAppointmentRepository;
pub use catalog::StaticCatalog;
pub use error::StorageError;
