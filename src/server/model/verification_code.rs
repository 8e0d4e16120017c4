use chrono::{DateTime, Utc};

use crate::{
    model::auth::ResetPasswordDto,
    server::{
        error::AppError,
        model::user::Credentials,
        util::validate::{normalize_email, require_non_blank},
    },
};

/// Pending password reset code of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCode {
    pub id: i32,
    pub user_id: i32,
    pub code: String,
    /// Wrong codes submitted so far.
    pub attempts: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    pub fn from_entity(entity: entity::verification_code::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            code: entity.code,
            attempts: entity.attempts,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Password reset authorized by a mailed code.
#[derive(Debug, Clone)]
pub struct ResetPasswordParams {
    pub email: String,
    pub code: String,
    pub credentials: Credentials,
}

impl ResetPasswordParams {
    pub fn from_dto(dto: ResetPasswordDto) -> Result<Self, AppError> {
        Ok(Self {
            email: normalize_email(dto.email)?,
            code: require_non_blank("code", dto.code)?,
            credentials: Credentials::from_password(&dto.password)?,
        })
    }
}
