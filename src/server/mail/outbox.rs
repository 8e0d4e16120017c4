use std::sync::Mutex;

use crate::server::{
    error::AppError,
    mail::{Mail, Mailer},
};

/// Mailer keeping every message it is given.
#[derive(Default)]
pub struct Outbox {
    sent: Mutex<Vec<Mail>>,
    failing: bool,
}

impl Outbox {
    /// Outbox refusing every message, like an unreachable relay.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for Outbox {
    async fn send(&self, mail: Mail) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::InternalError(format!(
                "Relay refused mail to {}",
                mail.to
            )));
        }

        self.sent.lock().unwrap().push(mail);

        Ok(())
    }
}
