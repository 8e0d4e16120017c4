use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Applies a full or partial account update.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::Conflict)` - New email belongs to another account
    /// - `Err(AppError::NotFound)` - Account no longer exists
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if let Some(other) = user_repo.find_by_email(email).await? {
                if other.id != params.id {
                    return Err(AppError::Conflict(format!("Email {} is already in use", email)));
                }
            }
        }

        let id = params.id;
        user_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Deletes an account together with everything it owns.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Expected: Err(AppError::Conflict) when taking another account's email
    #[tokio::test]
    async fn rejects_email_of_other_account() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let other = factory::user::create_user(db).await?;

        let result = UserService::new(db)
            .update(UpdateUserParams {
                id: user.id,
                email: Some(other.email.clone()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        let kept = UserService::new(db)
            .update(UpdateUserParams {
                id: user.id,
                email: Some(user.email.clone()),
                ..Default::default()
            })
            .await?;
        assert_eq!(kept.email, user.email);

        Ok(())
    }

    /// Expected: workspaces created by the user are deleted with the account
    #[tokio::test]
    async fn deletes_created_workspaces() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_workspace_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let workspace = factory::workspace::create_workspace(db, user.id).await?;

        UserService::new(db).delete(user.id).await?;

        let remaining = crate::server::data::workspace::WorkspaceRepository::new(db)
            .find_by_id(workspace.id)
            .await?;
        assert!(remaining.is_none());
        assert!(matches!(
            UserService::new(db).delete(user.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
