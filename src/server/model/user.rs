//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        user::{PatchUserDto, PublicUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        util::{
            password::{hash_password, MIN_PASSWORD_LENGTH},
            validate::{normalize_email, optional_non_blank, require_non_blank},
        },
    },
};

/// Account as stored, including credentials.
///
/// Credentials never leave the server: both DTO conversions drop them.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub oauth_provider: Option<String>,
    pub oauth_subject: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            oauth_provider: entity.oauth_provider,
            oauth_subject: entity.oauth_subject,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        }
    }

    /// Converts to the account DTO returned to the account owner.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            avatar_url: self.avatar_url,
            oauth_provider: self.oauth_provider,
            created_at: self.created_at,
        }
    }

    /// Converts to the profile DTO shown to other users.
    pub fn into_public_dto(self) -> PublicUserDto {
        PublicUserDto {
            id: self.id,
            username: self.username,
            avatar_url: self.avatar_url,
        }
    }
}

/// Stored form of a password.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    /// Argon2 hash in PHC string format, salt included.
    pub hash: String,
}

impl Credentials {
    /// Validates the password length and hashes it under a fresh salt.
    ///
    /// # Returns
    /// - `Ok(Credentials)` - Freshly salted hash
    /// - `Err(AppError::BadRequest)` - Password shorter than the minimum length
    pub fn from_password(password: &str) -> Result<Self, AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            hash: hash_password(password)?,
        })
    }
}

/// Identity of an account at an OAuth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthIdentity {
    pub provider: String,
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub credentials: Option<Credentials>,
    pub oauth: Option<OAuthIdentity>,
}

impl CreateUserParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        Ok(Self {
            username: require_non_blank("username", dto.username)?,
            email: normalize_email(dto.email)?,
            credentials: Some(Credentials::from_password(&dto.password)?),
            oauth: None,
        })
    }
}

/// Account update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    pub credentials: Option<Credentials>,
    pub avatar_url: Option<String>,
}

impl UpdateUserParams {
    pub fn from_update_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            username: Some(require_non_blank("username", dto.username)?),
            email: Some(normalize_email(dto.email)?),
            ..Default::default()
        })
    }

    pub fn from_patch_dto(id: i32, dto: PatchUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            username: optional_non_blank("username", dto.username)?,
            email: dto.email.map(normalize_email).transpose()?,
            credentials: dto
                .password
                .map(|p| Credentials::from_password(&p))
                .transpose()?,
            avatar_url: optional_non_blank("avatar_url", dto.avatar_url)?,
        })
    }
}
