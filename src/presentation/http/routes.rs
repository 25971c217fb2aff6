//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bookings", booking_routes())
        .nest("/airport-bookings", airport_booking_routes())
        .route("/contact-us", post(handlers::contact::submit_contact))
}

/// Standard booking routes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::booking::get_bookings))
        .route("/", post(handlers::booking::create_booking))
        .route("/{id}", get(handlers::booking::get_booking))
        .route("/{id}", put(handlers::booking::update_booking))
        .route("/{id}", delete(handlers::booking::delete_booking))
}

/// Airport transfer routes
fn airport_booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::airport_booking::get_airport_bookings))
        .route("/", post(handlers::airport_booking::create_airport_booking))
        .route("/{id}", get(handlers::airport_booking::get_airport_booking))
        .route(
            "/{id}",
            put(handlers::airport_booking::update_airport_booking),
        )
        .route(
            "/{id}",
            delete(handlers::airport_booking::delete_airport_booking),
        )
}
