use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    util::{password::verify_password, validate::normalize_email},
};

/// Email and password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a password account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email {} is already in use",
                params.email
            )));
        }

        let user = user_repo.create(params).await?;
        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails, OAuth-only accounts and wrong passwords all yield the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Anything else
    pub async fn login(&self, email: String, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = &user.password_hash else {
            tracing::debug!("User {} has no password, login refused", user.id);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }
}
