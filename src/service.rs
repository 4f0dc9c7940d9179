use lettre::{
    Address, Message,
    message::{Mailbox, MultiPart},
};

use std::sync::Arc;

use crate::{config::Config, relay::Relay, template};

pub const SENDER_NAME: &str = "Mail Service";
pub const SUBJECT: &str = "👋 Hello from Mail Service!";

pub struct EmailService {
    sender: String,
    relay: Arc<dyn Relay>,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("SMTP authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to connect to SMTP relay: {0}")]
    Connection(String),

    #[error("Failed to send email: {0}")]
    Other(String),
}

impl DispatchError {
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Authentication(_) => {
                "Email authentication failed. Please check your email configuration."
            }
            Self::Connection(_) => "Connection failed. Please check your internet connection.",
            Self::Other(_) => "Failed to send email. Please try again.",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Authentication(detail) | Self::Connection(detail) | Self::Other(detail) => detail,
        }
    }
}

impl EmailService {
    pub fn new(config: &Config, relay: Arc<dyn Relay>) -> Self {
        Self {
            sender: config.email_user.clone(),
            relay,
        }
    }

    fn build_message(&self, recipient: &str, name: &str) -> Result<Message, DispatchError> {
        let sender: Address = self
            .sender
            .parse()
            .map_err(|e| DispatchError::Other(format!("Invalid sender address: {e}")))?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| DispatchError::Other(format!("Invalid recipient address: {e}")))?;

        Message::builder()
            .from(Mailbox::new(Some(SENDER_NAME.to_string()), sender))
            .to(to)
            .subject(SUBJECT)
            .message_id(None)
            .multipart(MultiPart::alternative_plain_html(
                template::render_text(name),
                template::render_html(name),
            ))
            .map_err(|e| DispatchError::Other(format!("Failed to build email message: {e}")))
    }

    /// Sends the welcome email to `recipient`, exactly once.
    pub async fn send_email(&self, recipient: &str, name: &str) -> Result<String, DispatchError> {
        let email = self.build_message(recipient, name)?;

        tracing::info!("Sending email to '{}' with subject '{}'", recipient, SUBJECT);

        let message_id = self.relay.send(email).await?;

        tracing::info!("Message to {} sent successfully", recipient);

        Ok(message_id)
    }
}
