//! Email Service
//!
//! Renders and dispatches confirmation and status-update emails. Every event
//! produces two messages, one to the customer and one to the business
//! address, sent through a single `Mailer` transport; a failure on either
//! message surfaces as one recoverable error for the whole operation.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;

use crate::config::EmailSettings;
use crate::domain::{AirportBooking, Booking, BookingStatus, ContactMessage};

/// Email dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Trait abstracting the SMTP transport so tests can substitute a recorder.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a single message.
    async fn send(&self, message: Message) -> Result<(), EmailError>;
}

/// Email service trait defining the notification operations.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Confirmation pair for a new standard booking.
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), EmailError>;

    /// Confirmation pair for a new airport booking.
    async fn send_airport_booking_confirmation(
        &self,
        booking: &AirportBooking,
    ) -> Result<(), EmailError>;

    /// Status-update pair for a standard booking. Dispatches for every
    /// status, with a generic line for anything not accepted/declined.
    async fn send_booking_status_update(&self, booking: &Booking) -> Result<(), EmailError>;

    /// Status-update pair for an airport booking. Dispatches only when the
    /// status is accepted or declined; anything else is a silent no-op.
    async fn send_airport_status_update(&self, booking: &AirportBooking)
        -> Result<(), EmailError>;

    /// Receipt pair for a contact-form submission.
    async fn send_contact_us_message(&self, contact: &ContactMessage) -> Result<(), EmailError>;
}

/// Email service implementation over an injected transport.
pub struct EmailServiceImpl {
    mailer: Arc<dyn Mailer>,
    settings: EmailSettings,
}

impl EmailServiceImpl {
    /// Create a new EmailServiceImpl.
    pub fn new(mailer: Arc<dyn Mailer>, settings: EmailSettings) -> Self {
        Self { mailer, settings }
    }

    fn sender(&self) -> Result<Mailbox, EmailError> {
        let address = self
            .settings
            .sender_email
            .parse()
            .map_err(|_| EmailError::InvalidAddress(self.settings.sender_email.clone()))?;
        Ok(Mailbox::new(Some(self.settings.sender_name.clone()), address))
    }

    fn build_message(
        &self,
        recipient: &str,
        subject: &str,
        html_body: String,
    ) -> Result<Message, EmailError> {
        let to = recipient
            .parse()
            .map_err(|_| EmailError::InvalidAddress(recipient.to_string()))?;

        Message::builder()
            .from(self.sender()?)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| EmailError::Message(e.to_string()))
    }

    /// Send the customer and business copies for one event. Both go through
    /// the same transport; the first failure aborts the operation.
    async fn send_pair(
        &self,
        customer_email: &str,
        customer_subject: &str,
        customer_body: String,
        business_subject: &str,
        business_body: String,
    ) -> Result<(), EmailError> {
        let customer = self.build_message(customer_email, customer_subject, customer_body)?;
        let business = self.build_message(
            &self.settings.business_address,
            business_subject,
            business_body,
        )?;

        self.mailer.send(customer).await?;
        self.mailer.send(business).await?;

        tracing::info!(
            customer = %customer_email,
            business = %self.settings.business_address,
            "Notification emails dispatched"
        );
        Ok(())
    }
}

#[async_trait]
impl EmailService for EmailServiceImpl {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), EmailError> {
        self.send_pair(
            &booking.email,
            "Booking Confirmation",
            templates::customer_booking_confirmation(booking),
            "New Booking Alert",
            templates::business_booking_confirmation(booking),
        )
        .await
    }

    async fn send_airport_booking_confirmation(
        &self,
        booking: &AirportBooking,
    ) -> Result<(), EmailError> {
        self.send_pair(
            &booking.email,
            "Airport Booking Confirmation",
            templates::customer_airport_confirmation(booking),
            "New Airport Booking Alert",
            templates::business_airport_confirmation(booking),
        )
        .await
    }

    async fn send_booking_status_update(&self, booking: &Booking) -> Result<(), EmailError> {
        let status_message = match booking.status {
            BookingStatus::Accepted => "Your booking has been accepted.",
            BookingStatus::Declined => "Unfortunately, your booking has been declined.",
            BookingStatus::Pending => "Your booking status has been updated.",
        };

        self.send_pair(
            &booking.email,
            "Booking Status Update",
            templates::customer_booking_status(booking, status_message),
            "Booking Status Update",
            templates::business_booking_status(booking, status_message),
        )
        .await
    }

    async fn send_airport_status_update(
        &self,
        booking: &AirportBooking,
    ) -> Result<(), EmailError> {
        // Pending updates for airport transfers are intentionally silent;
        // only an accept/decline decision notifies the customer.
        let status_message = match booking.status {
            BookingStatus::Accepted => "Booking Accepted.",
            BookingStatus::Declined => "Booking Declined.",
            BookingStatus::Pending => return Ok(()),
        };

        self.send_pair(
            &booking.email,
            "Booking Status Update",
            templates::customer_airport_status(booking, status_message),
            "Booking Status Update",
            templates::business_airport_status(booking, status_message),
        )
        .await
    }

    async fn send_contact_us_message(&self, contact: &ContactMessage) -> Result<(), EmailError> {
        self.send_pair(
            &contact.email,
            "Message Received",
            templates::customer_contact_receipt(contact),
            "New Customer Query",
            templates::business_contact_alert(contact),
        )
        .await
    }
}

/// HTML body templates. Dates render as `yyyy-MM-dd`; times stay the
/// validated HH:mm text they arrived as.
pub(crate) mod templates {
    use super::*;

    fn format_date(date: &chrono::DateTime<chrono::Utc>) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn return_details(booking: &AirportBooking) -> String {
        match (&booking.return_date, &booking.return_time) {
            (Some(date), Some(time)) if booking.is_return_trip => format!(
                "<p>Return Date: {}</p>\n<p>Return Time: {}</p>",
                format_date(date),
                time
            ),
            _ => "<p>No return trip details provided.</p>".to_string(),
        }
    }

    pub fn customer_booking_confirmation(booking: &Booking) -> String {
        format!(
            "<h2>Booking Confirmation</h2>\
             <p>Dear {},</p>\
             <p>Your booking is confirmed for {} at {}.</p>\
             <p>Pickup: {}</p>\
             <p>Drop-off: {}</p>\
             <p>Thank you for choosing Jaj Taxi!</p>",
            booking.name,
            format_date(&booking.date),
            booking.time,
            booking.pickup_location,
            booking.drop_off_location,
        )
    }

    pub fn business_booking_confirmation(booking: &Booking) -> String {
        format!(
            "<h1>New Booking Alert</h1>\
             <p>A new booking has been made:</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Pickup: {}</li>\
             <li>Drop-off: {}</li>\
             <li>Date: {}</li>\
             <li>Time: {}</li>\
             </ul>",
            booking.name,
            booking.email,
            booking.pickup_location,
            booking.drop_off_location,
            format_date(&booking.date),
            booking.time,
        )
    }

    pub fn customer_airport_confirmation(booking: &AirportBooking) -> String {
        format!(
            "<h2>Airport Booking Confirmation</h2>\
             <p>Dear {},</p>\
             <p>Your airport booking is confirmed for {} at {}.</p>\
             <p>Pickup: {}</p>\
             <p>Destination: {}</p>\
             {}\
             <p>Thank you for choosing Jaj Taxi!</p>",
            booking.name,
            format_date(&booking.pickup_date),
            booking.pickup_time,
            booking.pickup_location,
            booking.airport_name,
            return_details(booking),
        )
    }

    pub fn business_airport_confirmation(booking: &AirportBooking) -> String {
        format!(
            "<h1>New Airport Booking Alert</h1>\
             <p>A new airport booking has been made:</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Pickup: {}</li>\
             <li>Airport: {}</li>\
             <li>Pickup Date: {}</li>\
             <li>Pickup Time: {}</li>\
             {}\
             </ul>",
            booking.name,
            booking.email,
            booking.pickup_location,
            booking.airport_name,
            format_date(&booking.pickup_date),
            booking.pickup_time,
            return_details(booking),
        )
    }

    pub fn customer_booking_status(booking: &Booking, status_message: &str) -> String {
        format!(
            "<h2>Booking Status Update</h2>\
             <p>Dear {},</p>\
             <p>{}</p>\
             <p>Pickup: {}</p>\
             <p>Drop-off: {}</p>\
             <p>Pickup Date: {}</p>\
             <p>Pickup Time: {}</p>\
             <p>Thank you for choosing Jaj Taxi!</p>",
            booking.name,
            status_message,
            booking.pickup_location,
            booking.drop_off_location,
            format_date(&booking.date),
            booking.time,
        )
    }

    pub fn business_booking_status(booking: &Booking, status_message: &str) -> String {
        format!(
            "<h1>Booking Status Update</h1>\
             <p>{}</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Pickup: {}</li>\
             <li>Drop-off: {}</li>\
             <li>Date: {}</li>\
             <li>Time: {}</li>\
             </ul>",
            status_message,
            booking.name,
            booking.email,
            booking.pickup_location,
            booking.drop_off_location,
            format_date(&booking.date),
            booking.time,
        )
    }

    pub fn customer_airport_status(booking: &AirportBooking, status_message: &str) -> String {
        format!(
            "<h2>Booking Status Update</h2>\
             <p>Dear {},</p>\
             <p>{}</p>\
             <p>Pickup: {}</p>\
             <p>Drop-off: {}</p>\
             <p>Pickup Date: {}</p>\
             <p>Pickup Time: {}</p>\
             {}\
             <p>Thank you for choosing Jaj Taxi!</p>",
            booking.name,
            status_message,
            booking.pickup_location,
            booking.airport_name,
            format_date(&booking.pickup_date),
            booking.pickup_time,
            return_details(booking),
        )
    }

    pub fn business_airport_status(booking: &AirportBooking, status_message: &str) -> String {
        format!(
            "<h1>Booking Status Update</h1>\
             <p>{}</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Pickup: {}</li>\
             <li>Drop-off: {}</li>\
             <li>Date: {}</li>\
             <li>Time: {}</li>\
             {}\
             </ul>",
            status_message,
            booking.name,
            booking.email,
            booking.pickup_location,
            booking.airport_name,
            format_date(&booking.pickup_date),
            booking.pickup_time,
            return_details(booking),
        )
    }

    pub fn customer_contact_receipt(contact: &ContactMessage) -> String {
        format!(
            "<h2>Message Received</h2>\
             <p>Dear {},</p>\
             <p>We are sending this email to confirm receipt of your query. \
             We will get back to you as soon as possible.</p>\
             <p>Here are the details of your query:</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Message: {}</li>\
             </ul>\
             <p>Best regards,<br>Team Jaj Taxi</p>",
            contact.name, contact.name, contact.email, contact.message,
        )
    }

    pub fn business_contact_alert(contact: &ContactMessage) -> String {
        format!(
            "<h2>Customer Query Received</h2>\
             <p>You have received a new message from {}</p>\
             <p>Details:</p>\
             <ul>\
             <li>Name: {}</li>\
             <li>Email: {}</li>\
             <li>Message: {}</li>\
             </ul>",
            contact.name, contact.name, contact.email, contact.message,
        )
    }
}
