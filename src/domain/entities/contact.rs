//! Contact-us message.
//!
//! Write-once and send-only: a submission is rendered into a pair of emails
//! and forwarded, never persisted. Durable storage is an extension point.

use serde::{Deserialize, Serialize};

/// A customer query submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,

    /// Sender email address, used for the receipt confirmation
    pub email: String,

    /// The query body
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_serializes_all_fields() {
        let msg = ContactMessage {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            message: "Do you take card payments?".into(),
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"name\":\"Ann\""));
        assert!(json.contains("\"email\":\"ann@x.com\""));
        assert!(json.contains("card payments"));
    }
}
