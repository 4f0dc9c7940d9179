use async_trait::async_trait;
use lettre::transport::smtp::{
    self,
    authentication::Credentials,
    response::{Category, Code, Detail, Severity},
};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::service::DispatchError;

/// Delivers a fully built message and returns the identifier it was sent under.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, message: Message) -> Result<String, DispatchError>;
}

pub struct SmtpRelay {
    host: String,
    credentials: Credentials,
}

impl SmtpRelay {
    pub fn new(host: String, username: String, password: String) -> Self {
        Self {
            host,
            credentials: Credentials::new(username, password),
        }
    }
}

#[async_trait]
impl Relay for SmtpRelay {
    async fn send(&self, message: Message) -> Result<String, DispatchError> {
        // A fresh transport per message, nothing is pooled between requests
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)
            .map_err(classify)?
            .credentials(self.credentials.clone())
            .build();

        let message_id = message_id(&message)?;

        tracing::debug!("Handing message {} to relay '{}'", message_id, self.host);

        mailer.send(message).await.map_err(classify)?;

        Ok(message_id)
    }
}

fn message_id(message: &Message) -> Result<String, DispatchError> {
    message
        .headers()
        .get_raw("Message-ID")
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| DispatchError::Other("Message has no Message-ID header".to_string()))
}

fn classify(err: smtp::Error) -> DispatchError {
    let detail = err.to_string();

    let auth_rejected = err.status().is_some_and(is_auth_rejection)
        || (err.is_client() && detail.contains("authentication mechanism"));
    if auth_rejected {
        return DispatchError::Authentication(detail);
    }

    if err.is_timeout() || err.is_tls() || caused_by_io(&err) {
        return DispatchError::Connection(detail);
    }

    DispatchError::Other(detail)
}

/// 530, 534 and 535 are the replies a relay gives when it refuses the credentials.
fn is_auth_rejection(code: Code) -> bool {
    matches!(code.severity, Severity::PermanentNegativeCompletion)
        && matches!(code.category, Category::Unspecified3)
        && matches!(code.detail, Detail::Zero | Detail::Four | Detail::Five)
}

fn caused_by_io(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if cause.is::<std::io::Error>() {
            return true;
        }
        source = cause.source();
    }
    false
}
