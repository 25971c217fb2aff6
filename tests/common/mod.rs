//! Common Test Utilities
//!
//! Shared helpers and test infrastructure. The application is exercised
//! through its router with in-memory stores and a recording mail transport,
//! so no database or SMTP relay is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use lettre::Message;
use parking_lot::Mutex;
use tower::ServiceExt;

use taxi_booking_server::application::services::{
    BookingServiceImpl, EmailError, EmailServiceImpl, Mailer,
};
use taxi_booking_server::config::EmailSettings;
use taxi_booking_server::infrastructure::repositories::{
    MemoryAirportBookingRepository, MemoryBookingRepository,
};
use taxi_booking_server::presentation::http::routes;
use taxi_booking_server::startup::AppState;

/// Mail transport double recording every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Message>>,
}

impl RecordingMailer {
    /// Envelope recipients of every recorded message, in send order.
    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .map(|m| {
                m.envelope()
                    .to()
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect()
    }

    /// Number of recorded messages.
    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: Message) -> Result<(), EmailError> {
        self.sent.lock().push(message);
        Ok(())
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    /// Create a new test application with in-memory dependencies
    pub fn new() -> Self {
        let mailer = Arc::new(RecordingMailer::default());

        let state = AppState {
            booking_service: Arc::new(BookingServiceImpl::new(
                Arc::new(MemoryBookingRepository::new()),
                Arc::new(MemoryAirportBookingRepository::new()),
            )),
            email_service: Arc::new(EmailServiceImpl::new(
                mailer.clone(),
                EmailSettings {
                    smtp_host: "smtp.example.com".into(),
                    smtp_port: 587,
                    username: "mailer".into(),
                    password: "secret".into(),
                    sender_name: "Jaj Taxi".into(),
                    sender_email: "bookings@jajtaxi.co.uk".into(),
                    business_address: "office@jajtaxi.co.uk".into(),
                },
            )),
        };

        Self {
            router: routes::create_router(state),
            mailer,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request to the application
    pub async fn delete(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Deserialize a response body as JSON
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
