use dioxus_logger::tracing;
use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    error::AppError,
    mail::{Mail, Mailer},
};

/// Mailer relaying through an SMTP server.
///
/// The transport keeps a connection pool, so clones share connections.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(transport: AsyncSmtpTransport<Tokio1Executor>, from: Mailbox) -> Self {
        Self { transport, from }
    }

    fn message(&self, mail: Mail) -> Result<Message, AppError> {
        let to: Mailbox = mail.to.parse().map_err(|e: AddressError| {
            AppError::BadRequest(format!("Invalid recipient '{}': {}", mail.to, e))
        })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)?;

        Ok(message)
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, mail: Mail) -> Result<(), AppError> {
        let to = mail.to.clone();
        let message = self.message(mail)?;

        self.transport.send(message).await?;

        tracing::debug!("Mail sent to {}", to);

        Ok(())
    }
}
