//! Password reset through a code sent by mail.
//!
//! A code is six digits, valid for `CODE_TTL_MINUTES` and burnt after
//! `MAX_CODE_ATTEMPTS` wrong guesses. Expired codes are purged by the maintenance job.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, verification_code::VerificationCodeRepository},
    error::AppError,
    mail::{Mail, Mailer},
    model::{
        user::{UpdateUserParams, User},
        verification_code::ResetPasswordParams,
    },
    util::validate::normalize_email,
};

pub const CODE_TTL_MINUTES: i64 = 15;
pub const MAX_CODE_ATTEMPTS: i32 = 5;

const NO_PENDING_RESET: &str = "This email has not asked to reset the password";

pub struct PasswordResetService<'a, M> {
    db: &'a DatabaseConnection,
    mailer: &'a M,
}

impl<'a, M: Mailer> PasswordResetService<'a, M> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a M) -> Self {
        Self { db, mailer }
    }

    /// Creates a fresh code for the account of `email` and mails it.
    ///
    /// A code still pending for the account is replaced. When the mail cannot be sent
    /// the new code is dropped again.
    ///
    /// # Returns
    /// - `Ok(())` - Code stored and mailed
    /// - `Err(AppError::BadRequest)` - Malformed email or no account uses it
    pub async fn send_code(&self, email: String) -> Result<(), AppError> {
        let user = self.user_by_email(email).await?.ok_or_else(|| {
            AppError::BadRequest("No account uses this email".to_string())
        })?;

        let code = generate_code();
        let code_repo = VerificationCodeRepository::new(self.db);
        code_repo
            .replace(
                user.id,
                code.clone(),
                Utc::now() + Duration::minutes(CODE_TTL_MINUTES),
            )
            .await?;

        let mail = Mail {
            to: user.email.clone(),
            subject: "[Taskboard] Verification code".to_string(),
            body: format!(
                "Your verification code is {}. It expires in {} minutes.",
                code, CODE_TTL_MINUTES
            ),
        };

        if let Err(e) = self.mailer.send(mail).await {
            code_repo.delete_by_user(user.id).await?;
            return Err(e);
        }

        tracing::info!("Sent a password reset code to user {}", user.id);

        Ok(())
    }

    /// Sets a new password when `params.code` matches the pending code.
    ///
    /// The code is consumed on success. A wrong code counts as an attempt, and the
    /// code is deleted once `MAX_CODE_ATTEMPTS` is reached.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::NotFound)` - No account, no pending code, expired or wrong code
    pub async fn reset_password(&self, params: ResetPasswordParams) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let code_repo = VerificationCodeRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(no_pending_reset());
        };
        let Some(pending) = code_repo.find_by_user(user.id).await? else {
            return Err(no_pending_reset());
        };

        if pending.is_expired(Utc::now()) {
            code_repo.delete_by_user(user.id).await?;
            return Err(no_pending_reset());
        }

        if pending.code != params.code {
            let attempts = code_repo.record_failed_attempt(pending.id).await?;
            if attempts.is_some_and(|n| n >= MAX_CODE_ATTEMPTS) {
                code_repo.delete_by_user(user.id).await?;
                tracing::info!("Reset code of user {} burnt after too many attempts", user.id);
            }
            return Err(no_pending_reset());
        }

        user_repo
            .update(UpdateUserParams {
                id: user.id,
                credentials: Some(params.credentials),
                ..Default::default()
            })
            .await?
            .ok_or_else(no_pending_reset)?;
        code_repo.delete_by_user(user.id).await?;

        tracing::info!("User {} reset their password", user.id);

        Ok(())
    }

    /// Drops the pending code of `email`, if any.
    ///
    /// # Returns
    /// - `Ok(())` - No code is pending anymore, including when there never was one
    /// - `Err(AppError::BadRequest)` - Malformed email
    pub async fn delete_code(&self, email: String) -> Result<(), AppError> {
        if let Some(user) = self.user_by_email(email).await? {
            VerificationCodeRepository::new(self.db)
                .delete_by_user(user.id)
                .await?;
        }

        Ok(())
    }

    async fn user_by_email(&self, email: String) -> Result<Option<User>, AppError> {
        let email = normalize_email(email)?;

        Ok(UserRepository::new(self.db).find_by_email(&email).await?)
    }
}

fn generate_code() -> String {
    rand::random_range(100_000..=999_999u32).to_string()
}

fn no_pending_reset() -> AppError {
    AppError::NotFound(NO_PENDING_RESET.to_string())
}
