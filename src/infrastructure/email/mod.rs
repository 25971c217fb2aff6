//! Email Transport
//!
//! SMTP implementation of the `Mailer` trait used by the email service.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::application::services::{EmailError, Mailer};
use crate::config::EmailSettings;

/// SMTP mailer backed by a pooled lettre transport.
pub struct LettreMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl LettreMailer {
    /// Build a transport for the configured relay using STARTTLS and the
    /// configured credentials.
    pub fn connect(settings: &EmailSettings) -> Result<Self, EmailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for LettreMailer {
    async fn send(&self, message: Message) -> Result<(), EmailError> {
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| EmailError::Transport(e.to_string()))
    }
}

/// Test double for the `Mailer` trait, shared by service and route tests.
#[cfg(test)]
pub mod testutils {
    use super::*;
    use parking_lot::Mutex;

    /// Transport double that records every message instead of sending it.
    #[derive(Default)]
    pub struct RecordingMailer {
        sent: Mutex<Vec<Message>>,
        fail: bool,
    }

    impl RecordingMailer {
        /// Recorder whose sends always fail with a transport error.
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

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
            if self.fail {
                return Err(EmailError::Transport("connection refused".into()));
            }
            self.sent.lock().push(message);
            Ok(())
        }
    }
}
