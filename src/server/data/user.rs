//! User data repository for database operations.
//!
//! Provides the `UserRepository` for account records: creation from registration or
//! OAuth login, lookups by ID, email and provider identity, updates and deletion.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{CreateUserParams, OAuthIdentity, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let password_hash = params.credentials.map(|credentials| credentials.hash);
        let (oauth_provider, oauth_subject) = match params.oauth {
            Some(identity) => (Some(identity.provider), Some(identity.subject)),
            None => (None, None),
        };

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            oauth_provider: ActiveValue::Set(oauth_provider),
            oauth_subject: ActiveValue::Set(oauth_subject),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email. Emails are stored lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Links a provider identity to an existing account.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with this ID
    pub async fn link_oauth(&self, id: i32, identity: OAuthIdentity) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            oauth_provider: ActiveValue::Set(Some(identity.provider)),
            oauth_subject: ActiveValue::Set(Some(identity.subject)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Applies the provided fields of `params`, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(credentials) = params.credentials {
            active.password_hash = ActiveValue::Set(Some(credentials.hash));
        }
        if let Some(avatar_url) = params.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user. Memberships, invitations, notifications, assignments and the
    /// workspaces the user created are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
