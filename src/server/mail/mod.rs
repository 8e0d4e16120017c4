//! Outgoing mail.
//!
//! Services send through the `Mailer` trait. The server uses `smtp::SmtpMailer`;
//! tests record messages in `outbox::Outbox`.

pub mod smtp;

#[cfg(test)]
pub mod outbox;

use std::future::Future;

use crate::server::error::AppError;

/// A plain text message to a single recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub trait Mailer {
    fn send(&self, mail: Mail) -> impl Future<Output = Result<(), AppError>> + Send;
}
