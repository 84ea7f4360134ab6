//! # barbershopd — barbershop scheduling daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`barbershop.toml`, env vars)
//! - Initialise logging
//! - Construct the catalog, the appointment store and the event bus (adapters)
//! - Construct the scheduling service, injecting them via port traits
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use barbershop_adapter_http_axum::state::AppState;
use barbershop_adapter_storage_memory::{InMemoryAppointmentRepository, StaticCatalog, seed};
use barbershop_app::event_bus::InProcessEventBus;
use barbershop_app::services::scheduling_service::SchedulingService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    // Storage
    let catalog = StaticCatalog::sample();
    let appointments = if config.seed.sample_appointments {
        InMemoryAppointmentRepository::with_appointments(seed::sample_appointments())
    } else {
        InMemoryAppointmentRepository::new()
    };

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Services
    let hours = config.business_hours()?;
    tracing::info!(
        open = %hours.open(),
        close = %hours.close(),
        slot_minutes = hours.slot_minutes(),
        "business hours"
    );
    let scheduling = SchedulingService::new(catalog, appointments, Arc::clone(&event_bus))
        .with_business_hours(hours);

    // HTTP
    let state = AppState::new(scheduling, event_bus);
    let app = barbershop_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "barbershopd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("barbershopd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter `{filter}` ({err}), falling back to `info`");
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(%err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
