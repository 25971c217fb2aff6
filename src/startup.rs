//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    BookingService, BookingServiceImpl, EmailService, EmailServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::email::LettreMailer;
use crate::infrastructure::repositories::{PgAirportBookingRepository, PgBookingRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub booking_service: Arc<dyn BookingService>,
    pub email_service: Arc<dyn EmailService>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool and apply pending migrations
        let db = database::create_pool(&settings.database).await?;
        database::run_migrations(&db).await?;
        tracing::info!("Database connection pool created");

        let booking_service: Arc<dyn BookingService> = Arc::new(BookingServiceImpl::new(
            Arc::new(PgBookingRepository::new(db.clone())),
            Arc::new(PgAirportBookingRepository::new(db)),
        ));

        // SMTP transport for customer and business notifications
        let mailer = Arc::new(LettreMailer::connect(&settings.email)?);
        let email_service: Arc<dyn EmailService> =
            Arc::new(EmailServiceImpl::new(mailer, settings.email.clone()));

        let state = AppState {
            booking_service,
            email_service,
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", settings.server_addr());

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
