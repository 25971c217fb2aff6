//! # Taxi Booking Server
//!
//! Booking backend for a taxi company.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - SMTP transport
//! - HTTP server

use anyhow::Result;
use tracing::info;

use taxi_booking_server::config::Settings;
use taxi_booking_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    taxi_booking_server::telemetry::init_tracing();

    info!("Starting Taxi Booking Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
